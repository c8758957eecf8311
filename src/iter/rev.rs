use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::RandomAccess;

/// An adaptor which inverts the direction of any [`RandomAccess`] position.
///
/// A `Rev` stores a forward position, its anchor, and dereferences to the element *before* it.
/// This one-off shift is what lets a reverse traversal be built from the same pair of bounds as a
/// forward one: `Rev::new(end)` references the last element and `Rev::new(begin)` is one past the
/// end of the reverse traversal.
///
/// Stepping forward moves the anchor backward and vice versa, distances are negated and ordering
/// is reversed. Because `Rev` implements [`RandomAccess`] itself, adaptors nest freely.
///
/// # Examples
/// ```
/// # use stl_recreation::iter::{Cursor, RandomAccess, Rev};
/// let values = [1, 2, 3];
/// let (begin, end) = Cursor::bounds(&values[..]);
/// let (rbegin, rend) = (Rev::new(end), Rev::new(begin));
///
/// // SAFETY: rbegin is anchored at end, so it references the last element.
/// assert_eq!(unsafe { *rbegin.get() }, 3);
/// assert_eq!(rend - rbegin, 3);
/// assert_eq!(rend.base(), begin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rev<I> {
    anchor: I,
}

impl<I: RandomAccess> Rev<I> {
    /// Creates a reverse position anchored at `anchor`, which will dereference to the element
    /// before `anchor`.
    pub const fn new(anchor: I) -> Rev<I> {
        Rev { anchor }
    }

    /// Returns the forward position this adaptor is anchored at. Note that this references the
    /// element *after* the one referenced by `self`.
    pub const fn base(&self) -> I {
        self.anchor
    }
}

impl<I: RandomAccess> RandomAccess for Rev<I> {
    type Item = I::Item;
    type Pointer = I::Pointer;

    fn advance_by(&mut self, n: isize) -> &mut Self {
        self.anchor.advance_by(n.wrapping_neg());
        self
    }

    fn offset_from(&self, origin: &Self) -> isize {
        origin.anchor.offset_from(&self.anchor)
    }

    unsafe fn get(&self) -> I::Item {
        // SAFETY: The caller guarantees that self is dereferenceable, which means the element
        // before the anchor is in range.
        unsafe { self.anchor.offset(-1).get() }
    }

    fn as_ptr(&self) -> I::Pointer {
        self.anchor.offset(-1).as_ptr()
    }
}

impl<I: RandomAccess> PartialOrd for Rev<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: RandomAccess> Ord for Rev<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.anchor.cmp(&self.anchor)
    }
}

impl<I: RandomAccess> Add<isize> for Rev<I> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        self.offset(rhs)
    }
}

impl<I: RandomAccess> Sub<isize> for Rev<I> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        self.offset(rhs.wrapping_neg())
    }
}

impl<I: RandomAccess> AddAssign<isize> for Rev<I> {
    fn add_assign(&mut self, rhs: isize) {
        self.advance_by(rhs);
    }
}

impl<I: RandomAccess> SubAssign<isize> for Rev<I> {
    fn sub_assign(&mut self, rhs: isize) {
        self.advance_by(rhs.wrapping_neg());
    }
}

impl<I: RandomAccess> Sub for Rev<I> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.offset_from(&rhs)
    }
}
