//! A module containing [`Array`] and associated types.
//!
//! Borrowed iteration uses [`Range`](crate::iter::Range)s of [`Cursor`](crate::iter::Cursor)s
//! (and their [`Rev`](crate::iter::Rev)ersed counterparts), while owned iteration uses
//! [`IntoIter`].
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
