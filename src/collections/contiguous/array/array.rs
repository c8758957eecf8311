use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::iter::{Cursor, CursorMut, RandomAccess, Range, Rev};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An array with a size fixed at compile time, storing its `N` elements inline. Similar to a
/// `[T; N]`, but traversed with the positions from [`iter`](crate::iter).
///
/// The storage of an Array never moves while it is borrowed, so any position obtained from it
/// remains valid for as long as the borrow it was created from.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `at` | `O(1)` |
/// | `get_unchecked` | `O(1)` |
/// | `begin` / `end` / `rbegin` / `rend` | `O(1)` |
/// | `new` / `from_list` | `O(n)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// The number of elements in every `Array<T, N>`.
    pub const SIZE: usize = N;

    /// Returns the size of the Array, which is always `N`.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// let arr: Array<u8, 4> = Array::new();
    /// assert_eq!(arr.size(), 4);
    /// ```
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns true if the Array holds no elements, which is only the case when `N` is zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error if `index`
    /// is not less than `N`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= N`.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3, 4, 5]);
    /// assert_eq!(arr.at(4), Ok(&5));
    /// assert!(arr.at(5).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index < N {
            // SAFETY: index has just been checked against N.
            Ok(unsafe { self.get_unchecked(index) })
        } else {
            Err(IndexOutOfBounds { index, len: N })
        }
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error if
    /// `index` is not less than `N`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index < N {
            // SAFETY: index has just been checked against N.
            Ok(unsafe { self.get_unchecked_mut(index) })
        } else {
            Err(IndexOutOfBounds { index, len: N })
        }
    }

    /// Returns a reference to the element at `index` without checking that it is in bounds.
    ///
    /// # Safety
    /// `index` must be less than `N`. Debug builds assert this.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index is within the Array.
        unsafe { self.begin().index(index as isize) }
    }

    /// Returns a mutable reference to the element at `index` without checking that it is in
    /// bounds.
    ///
    /// # Safety
    /// `index` must be less than `N`. Debug builds assert this.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let (begin, _) = self.bounds_mut();
        // SAFETY: The caller guarantees that index is within the Array, and self is mutably
        // borrowed for the lifetime of the reference.
        unsafe { begin.index(index as isize) }
    }

    /// Returns a raw pointer to the first element.
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable raw pointer to the first element.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns a read-only position at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        self.bounds().0
    }

    /// Returns a read-only position one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        self.bounds().1
    }

    /// Returns a read-only reverse position at the last element, anchored at [`end`](Self::end).
    pub fn rbegin(&self) -> Rev<Cursor<'_, T>> {
        Rev::new(self.end())
    }

    /// Returns a read-only reverse position one past the first element, anchored at
    /// [`begin`](Self::begin).
    pub fn rend(&self) -> Rev<Cursor<'_, T>> {
        Rev::new(self.begin())
    }

    /// Returns the `(begin, end)` pair of read-only positions.
    pub fn bounds(&self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        Cursor::bounds(&self.data)
    }

    /// Returns the `(rbegin, rend)` pair of read-only reverse positions.
    pub fn rbounds(&self) -> (Rev<Cursor<'_, T>>, Rev<Cursor<'_, T>>) {
        (self.rbegin(), self.rend())
    }

    /// Returns the `(begin, end)` pair of mutable positions. Both are returned together because
    /// each requires the Array to be mutably borrowed.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// # use stl_recreation::iter::RandomAccess;
    /// let mut arr = Array::from([1, 2, 3]);
    /// let (begin, end) = arr.bounds_mut();
    /// // SAFETY: Both positions are within the Array and only one reference is alive at a time.
    /// unsafe {
    ///     *begin.get() = 10;
    ///     *(end - 1).get() = 30;
    /// }
    /// assert_eq!(*arr, [10, 2, 30]);
    /// ```
    pub fn bounds_mut(&mut self) -> (CursorMut<'_, T>, CursorMut<'_, T>) {
        Cursor::bounds_mut(&mut self.data)
    }

    /// Returns the `(rbegin, rend)` pair of mutable reverse positions.
    pub fn rbounds_mut(&mut self) -> (Rev<CursorMut<'_, T>>, Rev<CursorMut<'_, T>>) {
        let (begin, end) = self.bounds_mut();
        (Rev::new(end), Rev::new(begin))
    }

    /// Returns a forward iterator over references to the elements.
    pub fn iter(&self) -> Range<Cursor<'_, T>> {
        let (begin, end) = self.bounds();
        // SAFETY: The bounds come from self, which is borrowed for the lifetime of the Range.
        unsafe { Range::new(begin, end) }
    }

    /// Returns a forward iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> Range<CursorMut<'_, T>> {
        let (begin, end) = self.bounds_mut();
        // SAFETY: The bounds come from self, which is mutably borrowed for the lifetime of the
        // Range.
        unsafe { Range::new(begin, end) }
    }

    /// Returns an iterator over references to the elements, from last to first.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3, 4, 5]);
    /// assert!(arr.iter_rev().copied().eq([5, 4, 3, 2, 1]));
    /// ```
    pub fn iter_rev(&self) -> Range<Rev<Cursor<'_, T>>> {
        self.iter().reversed()
    }

    /// Returns an iterator over mutable references to the elements, from last to first.
    pub fn iter_rev_mut(&mut self) -> Range<Rev<CursorMut<'_, T>>> {
        self.iter_mut().reversed()
    }

    /// Consumes the Array, returning the inner `[T; N]`.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Array<T, N> {
    /// Creates a new Array with every element set to the default value of `T`.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// let arr: Array<u32, 3> = Array::new();
    /// assert_eq!(*arr, [0, 0, 0]);
    /// ```
    pub fn new() -> Array<T, N> {
        Array {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Clone + Default, const N: usize> Array<T, N> {
    /// Creates a new Array holding a clone of each item in `list`, in order. Any elements past the
    /// end of `list` are set to the default value of `T`.
    ///
    /// `list` must not be longer than `N`. Debug builds assert this, release builds ignore the
    /// surplus items.
    ///
    /// # Panics
    /// Panics in debug builds if `list.len() > N`.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::collections::contiguous::Array;
    /// let arr: Array<u8, 4> = Array::from_list(&[1, 2]);
    /// assert_eq!(*arr, [1, 2, 0, 0]);
    /// ```
    pub fn from_list(list: &[T]) -> Array<T, N> {
        debug_assert!(
            list.len() <= N,
            "list of {} items is too large for Array of size {}",
            list.len(),
            N
        );

        let mut arr = Self::new();
        for (slot, item) in arr.iter_mut().zip(list) {
            *slot = item.clone();
        }
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self {
        Array { data }
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= N`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.at(index).throw()
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    /// # Panics
    /// Panics if `index >= N`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index).throw()
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, const N: usize> Borrow<[T]> for Array<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for Array<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Debug, const N: usize> Debug for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.data)
            .field("size", &N)
            .finish()
    }
}

impl<T: Debug, const N: usize> Display for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
