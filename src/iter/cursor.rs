use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr::NonNull;

use super::{Access, Const, Mut, RandomAccess};

/// A random-access position within a contiguous block of `T`s. This is the base iterator that
/// every other traversal type in this crate is built from.
///
/// `A` decides what dereferencing produces: [`Const`] gives `&'a T` and [`Mut`] gives
/// `&'a mut T`. See [`Cursor<'a, T>`](Cursor) and [`CursorMut`] for the two instantiations.
///
/// Positions are identified and ordered by address. In debug builds a cursor also remembers the
/// bounds of the block it came from, which is used to assert that dereferencing stays in range
/// and that only positions from the same block are compared or subtracted.
///
/// # Zero-Sized Types
/// For zero-sized `T`, each element is treated as occupying a single address so that positions
/// remain distinguishable. Dereferencing always goes through a dangling, aligned pointer.
///
/// # Examples
/// ```
/// # use stl_recreation::iter::{Cursor, RandomAccess};
/// let values = [1, 2, 3, 4];
/// let (begin, end) = Cursor::bounds(&values[..]);
///
/// assert_eq!(end - begin, 4);
/// // SAFETY: begin + 2 is within the block.
/// assert_eq!(unsafe { *(begin + 2).get() }, 3);
/// ```
pub struct Cursor<'a, T: 'a, A: Access = Const> {
    pub(crate) ptr: *mut T,
    pub(crate) origin: Origin,
    pub(crate) _phantom: PhantomData<A::Ref<'a, T>>,
}

/// A [`Cursor`] which dereferences to `&'a mut T`.
pub type CursorMut<'a, T> = Cursor<'a, T, Mut>;

impl<'a, T: 'a> Cursor<'a, T, Const> {
    /// Returns the `(begin, end)` pair of read-only positions for `slice`, where `end` is one past
    /// the last element.
    pub fn bounds(slice: &'a [T]) -> (Self, Self) {
        // SAFETY: The pointer and length come from a slice which is borrowed for 'a.
        unsafe { Self::from_raw_parts(slice.as_ptr().cast_mut(), slice.len()) }
    }
}

impl<'a, T: 'a> Cursor<'a, T, Mut> {
    /// Returns the `(begin, end)` pair of mutable positions for `slice`, where `end` is one past
    /// the last element.
    pub fn bounds_mut(slice: &'a mut [T]) -> (Self, Self) {
        let len = slice.len();
        // SAFETY: The pointer and length come from a slice which is mutably borrowed for 'a.
        unsafe { Self::from_raw_parts(slice.as_mut_ptr(), len) }
    }
}

impl<'a, T: 'a, A: Access> Cursor<'a, T, A> {
    /// Creates the `(begin, end)` pair of positions for a raw block of `len` elements starting at
    /// `ptr`.
    ///
    /// # Safety
    /// `ptr` must be non-null, aligned and point to `len` initialized values of `T`, valid for the
    /// access kind `A` throughout `'a`.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> (Self, Self) {
        let end = ptr.wrapping_byte_add(len.wrapping_mul(stride::<T>()));
        let origin = Origin::new(ptr.addr(), end.addr());

        (
            Cursor {
                ptr,
                origin,
                _phantom: PhantomData,
            },
            Cursor {
                ptr: end,
                origin,
                _phantom: PhantomData,
            },
        )
    }

    /// Returns the address of this position. For zero-sized types this is not the address of any
    /// element, but still orders positions correctly.
    pub fn addr(&self) -> usize {
        self.ptr.addr()
    }

    /// Projects this position onto a read-only one at the same address.
    pub const fn as_const(self) -> Cursor<'a, T, Const> {
        Cursor {
            ptr: self.ptr,
            origin: self.origin,
            _phantom: PhantomData,
        }
    }

    fn element_ptr(&self) -> *mut T {
        if mem::size_of::<T>() == 0 {
            NonNull::dangling().as_ptr()
        } else {
            self.ptr
        }
    }
}

impl<'a, T: 'a, A: Access> RandomAccess for Cursor<'a, T, A> {
    type Item = A::Ref<'a, T>;
    type Pointer = A::Ptr<T>;

    fn advance_by(&mut self, n: isize) -> &mut Self {
        self.ptr = self.ptr.wrapping_byte_offset(n.wrapping_mul(stride::<T>() as isize));
        self
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.origin.assert_same(&origin.origin);
        (self.addr() as isize).wrapping_sub(origin.addr() as isize) / stride::<T>() as isize
    }

    unsafe fn get(&self) -> A::Ref<'a, T> {
        self.origin.assert_contains(self.addr());
        // SAFETY: The caller guarantees that the position is in range of a live block, so the
        // pointer is aligned and initialized. Zero-sized types use a dangling pointer instead.
        unsafe { A::deref(self.element_ptr()) }
    }

    fn as_ptr(&self) -> A::Ptr<T> {
        A::raw(self.element_ptr())
    }
}

impl<'a, T: 'a, A: Access> Clone for Cursor<'a, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a, A: Access> Copy for Cursor<'a, T, A> {}

impl<'a, T: 'a, A: Access> PartialEq for Cursor<'a, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<'a, T: 'a, A: Access> Eq for Cursor<'a, T, A> {}

impl<'a, T: 'a, A: Access> PartialOrd for Cursor<'a, T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T: 'a, A: Access> Ord for Cursor<'a, T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.origin.assert_same(&other.origin);
        self.addr().cmp(&other.addr())
    }
}

impl<'a, T: 'a, A: Access> Debug for Cursor<'a, T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("ptr", &self.ptr).finish()
    }
}

impl<'a, T: 'a, A: Access> Add<isize> for Cursor<'a, T, A> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        self.offset(rhs)
    }
}

impl<'a, T: 'a, A: Access> Sub<isize> for Cursor<'a, T, A> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        self.offset(rhs.wrapping_neg())
    }
}

impl<'a, T: 'a, A: Access> AddAssign<isize> for Cursor<'a, T, A> {
    fn add_assign(&mut self, rhs: isize) {
        self.advance_by(rhs);
    }
}

impl<'a, T: 'a, A: Access> SubAssign<isize> for Cursor<'a, T, A> {
    fn sub_assign(&mut self, rhs: isize) {
        self.advance_by(rhs.wrapping_neg());
    }
}

impl<'a, T: 'a, A: Access> Sub for Cursor<'a, T, A> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.offset_from(&rhs)
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T, Const> {
    fn from(value: CursorMut<'a, T>) -> Self {
        value.as_const()
    }
}

/// The number of address units a position moves per element.
const fn stride<T>() -> usize {
    match mem::size_of::<T>() {
        0 => 1,
        size => size,
    }
}

/// The bounds of the block a position was created from. Only recorded in debug builds, where it
/// backs the precondition assertions. In release builds this is a zero-sized type and every check
/// compiles to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Origin {
    #[cfg(debug_assertions)]
    start: usize,
    #[cfg(debug_assertions)]
    end: usize,
}

impl Origin {
    #[allow(unused_variables)]
    pub(crate) const fn new(start: usize, end: usize) -> Origin {
        Origin {
            #[cfg(debug_assertions)]
            start,
            #[cfg(debug_assertions)]
            end,
        }
    }

    pub(crate) fn assert_same(&self, other: &Origin) {
        debug_assert!(
            self == other,
            "positions from different blocks can't be compared or subtracted"
        );
    }

    #[allow(unused_variables)]
    pub(crate) fn assert_contains(&self, addr: usize) {
        #[cfg(debug_assertions)]
        assert!(
            self.start <= addr && addr < self.end,
            "dereferenced a position outside of its block"
        );
    }
}
