use derive_more::{Display, Error};

/// The error produced by checked indexed access when `index` is not less than the number of
/// elements in the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The error behind dereferencing a [`UniquePtr`](crate::ptr::UniquePtr) that doesn't own
/// anything.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("attempted to dereference a null UniquePtr")]
pub struct NullPointerError;
