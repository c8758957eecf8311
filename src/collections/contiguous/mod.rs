//! Contiguous collection types. Namely [`Array`], which stores a number of elements fixed at
//! compile time, inline.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;
