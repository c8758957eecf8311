//! This crate is my attempt at recreating a few building blocks of the C++ standard library in
//! Rust: random-access iterators, a fixed-size array and a sole-ownership pointer.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Rust's iterators are streams, C++'s are positions, and writing
//! the latter in the former's language helps me to understand what each model gives up.
//!
//! # Method
//! The interesting part is [`iter`]. A single position type, [`Cursor`](iter::Cursor), is written
//! once and made generic over mutability, and a single adaptor, [`Rev`](iter::Rev), reverses any
//! position. Everything else is built by composing them rather than duplicating the arithmetic.
//! [`Array`](collections::contiguous::Array) and [`UniquePtr`](ptr::UniquePtr) are mostly
//! consumers of that layer.
//!
//! # Error Handling
//! Following C++, most preconditions here are caller contracts: dereferencing a position is an
//! `unsafe` operation and nothing is checked in release builds. Debug builds assert as much as
//! they can, so contract violations tend to show up as panics during testing.
//!
//! The one recoverable failure is checked indexing, which returns an
//! [`IndexOutOfBounds`](error::IndexOutOfBounds). Errors are structs (often ZSTs) that implement
//! [`Error`](std::error::Error), one per failure.
//!
//! # Dependencies
//! This crate uses `std` and `derive_more`, the latter for the error types, because derive macros
//! remove the need for some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod iter;
#[cfg(feature = "ptr")]
pub mod ptr;

pub(crate) mod util;

pub use util::error;
