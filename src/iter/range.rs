use std::iter::FusedIterator;

use super::{RandomAccess, Rev};

/// A half-open range of positions, `[front, back)`, usable as a regular [`Iterator`].
///
/// This is how containers expose safe traversal on top of their positions: because a `Range` can
/// only be created safely by the container that owns the block, every position it yields from is
/// known to be dereferenceable. Each element is yielded at most once, so ranges of mutable
/// positions hand out non-overlapping `&mut T`s.
///
/// Iterating from the front or the back moves the corresponding end inwards, and the range is
/// exhausted once the two meet.
#[derive(Debug)]
pub struct Range<I> {
    front: I,
    back: I,
}

impl<I: RandomAccess> Range<I> {
    /// Creates a range between two positions.
    ///
    /// # Safety
    /// Both positions must originate from the same live block, with `front <= back`, and every
    /// position in `[front, back)` must be dereferenceable for as long as the range or any item it
    /// yields is alive. For mutable positions, no other reference into that part of the block may
    /// be alive in that time either.
    pub unsafe fn new(front: I, back: I) -> Range<I> {
        debug_assert!(front <= back, "range bounds are out of order");
        Range { front, back }
    }

    /// Returns the remaining `(front, back)` pair of positions.
    pub fn into_bounds(self) -> (I, I) {
        (self.front, self.back)
    }

    /// Turns this range into one that traverses the same elements in the opposite order, by
    /// anchoring a [`Rev`] at each end.
    pub fn reversed(self) -> Range<Rev<I>> {
        Range {
            front: Rev::new(self.back),
            back: Rev::new(self.front),
        }
    }
}

impl<I: RandomAccess> Iterator for Range<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: front is before back, so it is within the block. It is moved past the element
            // before returning, so the element won't be yielded again.
            Some(unsafe { self.front.post_inc().get() })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            None
        } else {
            self.front.advance_by(n as isize);
            self.next()
        }
    }
}

impl<I: RandomAccess> DoubleEndedIterator for Range<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: back is after front, so the element before it is within the block. back now
            // excludes the element, so it won't be yielded again.
            Some(unsafe { self.back.dec().get() })
        }
    }
}

impl<I: RandomAccess> ExactSizeIterator for Range<I> {
    fn len(&self) -> usize {
        self.back.offset_from(&self.front) as usize
    }
}

impl<I: RandomAccess> FusedIterator for Range<I> {}
