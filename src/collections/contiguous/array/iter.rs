use std::array;

use super::Array;
use crate::iter::{Cursor, CursorMut, Range};

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;

    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// An owned type for owned iteration over an [`Array`]. See [`Array::into_iter`].
///
/// Owned iteration moves values out of the Array, which positions can't express safely, so this is
/// the by-value iterator of the inner `[T; N]`.
pub type IntoIter<T, const N: usize> = array::IntoIter<T, N>;

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;

    type IntoIter = Range<Cursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;

    type IntoIter = Range<CursorMut<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default, const N: usize> FromIterator<T> for Array<T, N> {
    /// Collects up to `N` items into an Array, setting any remaining elements to the default value
    /// of `T`. Items past the first `N` are not consumed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for (slot, item) in arr.iter_mut().zip(iter) {
            *slot = item;
        }
        arr
    }
}
