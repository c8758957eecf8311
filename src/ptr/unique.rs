use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::NonNull;

use crate::iter::{Cursor, CursorMut, Range};
use crate::util::error::NullPointerError;
use crate::util::result::ResultExtension;

/// A pointer which is the sole owner of zero or one heap allocated value. Similar to a
/// [`Box<T>`], except that it may be null and ownership can be released or reset explicitly.
///
/// `UniquePtr<T>` manages a single value, while `UniquePtr<[T]>` manages a block of values, which
/// is deallocated as a block. The owned value is dropped exactly once: when the pointer is reset,
/// reassigned or dropped, unless ownership was released or transferred beforehand.
///
/// UniquePtr isn't [`Clone`], ownership can only be moved. Moving out of a place that needs to
/// remain valid is done with [`UniquePtr::take`], which leaves a null pointer behind.
///
/// # Examples
/// ```
/// # use stl_recreation::ptr::UniquePtr;
/// let mut ptr = UniquePtr::new(5);
/// *ptr += 1;
/// assert_eq!(*ptr, 6);
///
/// let moved = ptr.take();
/// assert!(ptr.is_null());
/// assert_eq!(moved.value(), Some(&6));
/// ```
pub struct UniquePtr<T: ?Sized> {
    ptr: Option<NonNull<T>>,
    _phantom: PhantomData<T>,
}

impl<T: ?Sized> UniquePtr<T> {
    /// Creates a UniquePtr which doesn't own anything.
    pub const fn null() -> UniquePtr<T> {
        UniquePtr {
            ptr: None,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of a value previously leaked from a [`Box`], or null.
    ///
    /// # Safety
    /// If `ptr` is non-null, it must have been allocated in the global allocator with the layout
    /// of a `Box<T>` (e.g. via [`Box::into_raw`] or [`UniquePtr::release`]) and not be owned by
    /// anything else.
    pub unsafe fn from_raw(ptr: *mut T) -> UniquePtr<T> {
        UniquePtr {
            ptr: NonNull::new(ptr),
            _phantom: PhantomData,
        }
    }

    /// Returns true if this UniquePtr doesn't own anything.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Returns the address of the managed value, or [`None`] if this UniquePtr is null. Ownership
    /// is retained.
    pub const fn get(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Returns a reference to the managed value, or [`None`] if this UniquePtr is null.
    pub const fn value(&self) -> Option<&T> {
        match self.ptr {
            // SAFETY: The pointer is uniquely owned and always points to a live value, the
            // reference is bound to a borrow of self.
            Some(ptr) => Some(unsafe { ptr.as_ref() }),
            None => None,
        }
    }

    /// Returns a mutable reference to the managed value, or [`None`] if this UniquePtr is null.
    pub const fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.ptr {
            // SAFETY: The pointer is uniquely owned and always points to a live value, the
            // reference is bound to a mutable borrow of self.
            Some(ptr) => Some(unsafe { ptr.as_mut() }),
            None => None,
        }
    }

    /// Releases ownership of the managed value without dropping it, leaving this UniquePtr null.
    ///
    /// The caller becomes responsible for the value, which can be reclaimed with
    /// [`UniquePtr::from_raw`] or [`Box::from_raw`].
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::ptr::UniquePtr;
    /// let mut ptr = UniquePtr::new(String::from("owned"));
    /// let raw = ptr.release().unwrap();
    /// assert!(ptr.is_null());
    ///
    /// // SAFETY: raw was released from a UniquePtr and nothing else owns it.
    /// let reclaimed = unsafe { Box::from_raw(raw.as_ptr()) };
    /// assert_eq!(*reclaimed, "owned");
    /// ```
    pub const fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Drops the managed value, if any, and then takes ownership of `boxed`. Passing [`None`]
    /// leaves this UniquePtr null.
    pub fn reset(&mut self, boxed: Option<Box<T>>) {
        if let Some(old) = self.ptr.take() {
            // SAFETY: The pointer came from a Box and is uniquely owned, it has just been removed
            // from self so it can't be freed twice.
            drop(unsafe { Box::from_raw(old.as_ptr()) });
        }

        self.ptr = boxed.map(|boxed| NonNull::from(Box::leak(boxed)));
    }

    /// Transfers ownership out of this UniquePtr into a new one, leaving this one null.
    pub const fn take(&mut self) -> UniquePtr<T> {
        UniquePtr {
            ptr: self.ptr.take(),
            _phantom: PhantomData,
        }
    }

    /// Swaps the values managed by two UniquePtrs, without dropping either.
    pub fn swap(&mut self, other: &mut UniquePtr<T>) {
        mem::swap(&mut self.ptr, &mut other.ptr);
    }

    /// Converts this UniquePtr into a [`Box`], or [`None`] if it is null.
    pub fn into_box(mut self) -> Option<Box<T>> {
        self.release()
            // SAFETY: The pointer came from a Box and ownership has just been released.
            .map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
    }
}

impl<T> UniquePtr<T> {
    /// Allocates `value` on the heap and creates a UniquePtr managing it.
    pub fn new(value: T) -> UniquePtr<T> {
        UniquePtr::from(Box::new(value))
    }

    /// Drops the managed value, if any, and then manages `value` instead.
    pub fn replace(&mut self, value: T) {
        self.reset(Some(Box::new(value)));
    }
}

impl<T> UniquePtr<[T]> {
    /// Returns the number of elements in the managed block, which is 0 if this UniquePtr is null.
    pub const fn len(&self) -> usize {
        match self.ptr {
            Some(ptr) => ptr.len(),
            None => 0,
        }
    }

    /// Returns true if the managed block has no elements or this UniquePtr is null.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index` without checking that the UniquePtr is
    /// non-null or that `index` is in bounds.
    ///
    /// # Safety
    /// This UniquePtr must be non-null and `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that the block exists and that index is in bounds.
        unsafe { self.value().unwrap_unchecked().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without checking that the UniquePtr
    /// is non-null or that `index` is in bounds.
    ///
    /// # Safety
    /// This UniquePtr must be non-null and `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that the block exists and that index is in bounds.
        unsafe { self.value_mut().unwrap_unchecked().get_unchecked_mut(index) }
    }

    /// Returns the `(begin, end)` pair of read-only positions over the managed block. A null
    /// UniquePtr produces an empty pair.
    pub fn bounds(&self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        Cursor::bounds(self.value().unwrap_or_default())
    }

    /// Returns the `(begin, end)` pair of mutable positions over the managed block. A null
    /// UniquePtr produces an empty pair.
    pub fn bounds_mut(&mut self) -> (CursorMut<'_, T>, CursorMut<'_, T>) {
        Cursor::bounds_mut(self.value_mut().unwrap_or_default())
    }

    /// Returns a forward iterator over references to the elements of the managed block.
    pub fn iter(&self) -> Range<Cursor<'_, T>> {
        let (begin, end) = self.bounds();
        // SAFETY: The bounds come from self, which is borrowed for the lifetime of the Range.
        unsafe { Range::new(begin, end) }
    }

    /// Returns a forward iterator over mutable references to the elements of the managed block.
    pub fn iter_mut(&mut self) -> Range<CursorMut<'_, T>> {
        let (begin, end) = self.bounds_mut();
        // SAFETY: The bounds come from self, which is mutably borrowed for the lifetime of the
        // Range.
        unsafe { Range::new(begin, end) }
    }
}

impl<T: Default> UniquePtr<[T]> {
    /// Allocates a block of `len` default values and creates a UniquePtr managing it.
    ///
    /// # Examples
    /// ```
    /// # use stl_recreation::ptr::UniquePtr;
    /// let mut block = UniquePtr::<[u32]>::repeat_default(3);
    /// block[1] = 42;
    /// assert_eq!(&*block, &[0, 42, 0]);
    /// ```
    pub fn repeat_default(len: usize) -> UniquePtr<[T]> {
        (0..len).map(|_| T::default()).collect()
    }
}

impl<T: ?Sized> Drop for UniquePtr<T> {
    fn drop(&mut self) {
        self.reset(None);
    }
}

impl<T: ?Sized> Default for UniquePtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> From<Box<T>> for UniquePtr<T> {
    fn from(boxed: Box<T>) -> Self {
        UniquePtr {
            ptr: Some(NonNull::from(Box::leak(boxed))),
            _phantom: PhantomData,
        }
    }
}

impl<T> FromIterator<T> for UniquePtr<[T]> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        UniquePtr::from(iter.into_iter().collect::<Box<[T]>>())
    }
}

impl<T: ?Sized> Deref for UniquePtr<T> {
    type Target = T;

    /// # Panics
    /// Panics with [`NullPointerError`] if this UniquePtr is null.
    #[track_caller]
    fn deref(&self) -> &T {
        self.value().ok_or(NullPointerError).throw()
    }
}

impl<T: ?Sized> DerefMut for UniquePtr<T> {
    /// # Panics
    /// Panics with [`NullPointerError`] if this UniquePtr is null.
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut().ok_or(NullPointerError).throw()
    }
}

impl<T> Index<usize> for UniquePtr<[T]> {
    type Output = T;

    /// # Panics
    /// Panics if this UniquePtr is null or `index` is out of bounds.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.deref()[index]
    }
}

impl<T> IndexMut<usize> for UniquePtr<[T]> {
    /// # Panics
    /// Panics if this UniquePtr is null or `index` is out of bounds.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.deref_mut()[index]
    }
}

impl<T: ?Sized + Debug> Debug for UniquePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => f.debug_tuple("UniquePtr").field(&value).finish(),
            None => write!(f, "UniquePtr(null)"),
        }
    }
}

// SAFETY: UniquePtr owns its value exclusively, like a Box, so it can be sent between threads when
// T: Send.
unsafe impl<T: ?Sized + Send> Send for UniquePtr<T> {}
// SAFETY: UniquePtr's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that UniquePtr<T> can safely implement Sync when T: Sync.
unsafe impl<T: ?Sized + Sync> Sync for UniquePtr<T> {}
