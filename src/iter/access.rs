use crate::util::sealed::Sealed;

/// A marker fixing whether a [`Cursor`](super::Cursor) hands out shared or exclusive references.
///
/// The trait is sealed, the only implementors are [`Const`] and [`Mut`]. Traversal logic is
/// written once, generic over `A: Access`, and only the reference and pointer types produced at
/// the edges differ between the two.
pub trait Access: Sealed + Copy + 'static {
    /// The reference produced by dereferencing a position.
    type Ref<'a, T: 'a>;
    /// The raw pointer produced by member access.
    type Ptr<T>: Copy;

    /// Turns a raw element pointer into the reference type of this access kind.
    ///
    /// # Safety
    /// `ptr` must be properly aligned, point to an initialized `T` and be valid for the access kind
    /// (reads, or reads and writes) throughout `'a`, with no conflicting references alive.
    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> Self::Ref<'a, T>;

    fn raw<T>(ptr: *mut T) -> Self::Ptr<T>;
}

/// Read-only access, dereferencing to `&T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Const {}

/// Mutable access, dereferencing to `&mut T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mut {}

impl Sealed for Const {}
impl Sealed for Mut {}

impl Access for Const {
    type Ref<'a, T: 'a> = &'a T;
    type Ptr<T> = *const T;

    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> &'a T {
        // SAFETY: Responsibility is passed to the caller.
        unsafe { &*ptr }
    }

    fn raw<T>(ptr: *mut T) -> *const T {
        ptr.cast_const()
    }
}

impl Access for Mut {
    type Ref<'a, T: 'a> = &'a mut T;
    type Ptr<T> = *mut T;

    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> &'a mut T {
        // SAFETY: Responsibility is passed to the caller.
        unsafe { &mut *ptr }
    }

    fn raw<T>(ptr: *mut T) -> *mut T {
        ptr
    }
}
