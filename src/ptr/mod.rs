//! Smart pointers. Currently only [`UniquePtr`], a sole-ownership pointer for single values and
//! blocks.
#![warn(missing_docs)]

mod unique;

pub use unique::*;
