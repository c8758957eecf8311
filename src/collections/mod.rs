//! General-purpose collection types built on the positions in [`iter`](crate::iter).
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. Traversal is provided by the
//! crate's own [`Cursor`](crate::iter::Cursor)s and [`Range`](crate::iter::Range)s rather than the
//! ones from [`std::slice`].

#[cfg(feature = "contiguous")]
pub mod contiguous;
