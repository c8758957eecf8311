//! Random-access positions over contiguous storage, and the adaptors built on them.
//!
//! # Purpose
//! Rust's iterators are consuming streams, but a lot of algorithms are easier to express with
//! positions that can be copied, compared, subtracted and moved in both directions. This module
//! writes that traversal logic exactly once, in [`Cursor`], and gets everything else by
//! composition:
//!
//! - Mutability is a type parameter of [`Cursor`] ([`Const`] or [`Mut`]), so the read-only and
//!   mutable forms share every line of arithmetic.
//! - Direction is an adaptor, [`Rev`], which wraps anything implementing [`RandomAccess`] (itself
//!   included) and inverts stepping and ordering.
//! - [`Range`] pairs two positions and implements [`Iterator`], which is how containers expose
//!   safe traversal on top of the positions.
//!
//! # Safety
//! Positions never own or borrow-check the storage they address, only a lifetime ties them to it.
//! Moving a position is always safe (the arithmetic wraps), but dereferencing one is `unsafe`: the
//! caller guarantees it lies within its block and that no conflicting reference is alive. Debug
//! builds assert the range and same-block preconditions, release builds check nothing.

mod access;
mod cursor;
mod range;
mod rev;

pub use access::*;
pub use cursor::*;
pub use range::*;
pub use rev::*;

/// The contract of a random-access position: stepping in both directions, arithmetic by a signed
/// element count, signed distance between two positions, a total order and dereferencing.
///
/// Implementors only provide [`advance_by`](RandomAccess::advance_by),
/// [`offset_from`](RandomAccess::offset_from), [`get`](RandomAccess::get) and
/// [`as_ptr`](RandomAccess::as_ptr). Everything else is defined in terms of those.
///
/// Two positions may only be compared or subtracted if they originate from the same block.
pub trait RandomAccess: Copy + Ord {
    /// The reference produced by dereferencing.
    type Item;
    /// The raw pointer produced by member access.
    type Pointer;

    /// Moves the position by `n` elements (backwards if `n` is negative) and returns it.
    fn advance_by(&mut self, n: isize) -> &mut Self;

    /// Returns the signed number of elements from `origin` to `self`, so that
    /// `origin.offset(self.offset_from(&origin)) == self`.
    fn offset_from(&self, origin: &Self) -> isize;

    /// Dereferences the position.
    ///
    /// # Safety
    /// The position must address an element within its originating block, the block must still be
    /// alive and, for mutable positions, no other reference to the element may be alive while the
    /// returned one is.
    unsafe fn get(&self) -> Self::Item;

    /// Returns the address of the element [`get`](RandomAccess::get) would reference. Obtaining it
    /// is safe, using it is subject to the same rules as `get`.
    fn as_ptr(&self) -> Self::Pointer;

    /// Returns a new position `n` elements further along, leaving `self` unchanged.
    fn offset(&self, n: isize) -> Self {
        let mut copy = *self;
        copy.advance_by(n);
        copy
    }

    fn inc(&mut self) -> &mut Self {
        self.advance_by(1)
    }

    fn dec(&mut self) -> &mut Self {
        self.advance_by(-1)
    }

    /// Steps forward by one, returning the position from before the step.
    fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Steps backward by one, returning the position from before the step.
    fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }

    /// Dereferences the position `n` elements along, without moving `self`.
    ///
    /// # Safety
    /// The same as [`get`](RandomAccess::get), for the position `self.offset(n)`.
    unsafe fn index(&self, n: isize) -> Self::Item {
        // SAFETY: Responsibility is passed to the caller.
        unsafe { self.offset(n).get() }
    }
}
