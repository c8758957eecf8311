#![cfg(test)]

use std::array;
use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::iter::RandomAccess;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: Array<u32, 4> = Array::new();
    assert_eq!(*arr, [0, 0, 0, 0], "New Arrays should hold default values.");
    assert_eq!(arr.size(), 4);
    assert_eq!(Array::<u32, 4>::SIZE, 4);

    let arr: Array<u32, 5> = Array::from_list(&[1, 2, 3]);
    assert_eq!(*arr, [1, 2, 3, 0, 0], "Elements past the list should be defaulted.");

    let arr: Array<u32, 3> = Array::from_list(&[1, 2, 3]);
    assert_eq!(arr, Array::from([1, 2, 3]), "A full list should fill the whole Array.");

    let arr: Array<u32, 3> = (1..10).collect();
    assert_eq!(*arr, [1, 2, 3], "Collecting should stop after N items.");

    let empty: Array<u32, 0> = Array::new();
    assert!(empty.is_empty());
    assert_eq!(empty.begin(), empty.end());
    assert_eq!(empty.iter_rev().count(), 0);
}

#[test]
#[cfg(debug_assertions)]
fn test_oversized_list() {
    assert_panics!({
        let _: Array<u32, 2> = Array::from_list(&[1, 2, 3]);
    });
}

#[test]
fn test_checked_access() {
    let mut arr = Array::from([1, 2, 3, 4, 5]);

    assert_eq!(arr.at(4), Ok(&5));
    assert_eq!(
        arr.at(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Checked access at N should fail with out of range."
    );
    assert_eq!(
        arr.at(5).unwrap_err().to_string(),
        "index 5 out of bounds for collection with 5 elements"
    );

    *arr.at_mut(0).unwrap() = 10;
    assert!(arr.at_mut(7).is_err());
    assert_eq!(arr[0], 10);

    arr[4] = 50;
    // SAFETY: Both indices are less than 5.
    unsafe {
        assert_eq!(*arr.get_unchecked(4), 50);
        *arr.get_unchecked_mut(1) = 20;
    }
    assert_eq!(*arr, [10, 20, 3, 4, 50]);

    assert_panics!({
        let _value: i32 = arr[5];
    });
}

#[test]
fn test_positions() {
    let arr = Array::from([1, 2, 3, 4, 5]);

    assert_eq!(arr.end() - arr.begin(), 5);
    assert_eq!(arr.begin().as_ptr(), arr.as_ptr());
    assert_eq!(arr.rbegin().base(), arr.end(), "rbegin should be anchored at end.");
    assert_eq!(arr.rend().base(), arr.begin(), "rend should be anchored at begin.");

    // SAFETY: rbegin and rend - 1 reference the last and first elements.
    unsafe {
        assert_eq!(*arr.rbegin().get(), arr[4], "rbegin should reference the last element.");
        assert_eq!(*(arr.rend() - 1).get(), arr[0], "rend - 1 should reference the first element.");
    }

    let (rbegin, rend) = arr.rbounds();
    let mut pos = rbegin;
    let mut seen = Array::<i32, 5>::new();
    let mut i = 0;
    while pos != rend {
        // SAFETY: pos is in [rbegin, rend).
        seen[i] = unsafe { *pos.post_inc().get() };
        i += 1;
    }
    assert_eq!(*seen, [5, 4, 3, 2, 1], "Reverse traversal should visit elements last to first.");
}

#[test]
fn test_mutable_positions() {
    let mut arr = Array::from([1, 2, 3, 4]);

    let (begin, _) = arr.bounds_mut();
    // SAFETY: begin + 1 is within the Array.
    unsafe { *(begin + 1).get() = 20 };
    assert_eq!(arr.at(1), Ok(&20), "Writes through a position should be visible afterwards.");

    let (rbegin, _) = arr.rbounds_mut();
    // SAFETY: rbegin references the last element.
    unsafe { *rbegin.get() = 40 };
    assert_eq!(arr[3], 40, "Writes through a reverse position should land on the last element.");

    for value in &mut arr {
        *value += 1;
    }
    for (i, value) in arr.iter_rev_mut().enumerate() {
        *value *= i as i32 + 1;
    }
    assert_eq!(*arr, [8, 63, 8, 41]);
}

#[test]
fn test_iterators() {
    let arr = Array::from([1, 2, 3, 4, 5]);

    assert!(arr.iter().copied().eq([1, 2, 3, 4, 5]));
    assert!(arr.iter_rev().copied().eq([5, 4, 3, 2, 1]));
    assert!(
        arr.iter_rev().eq(arr.iter().rev()),
        "Reverse traversal should be the exact reversal of forward traversal."
    );
    assert_eq!((&arr).into_iter().len(), 5);
    assert_eq!(arr.iter().map(|v| v * 2).sum::<i32>(), 30);

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.len(), 3);

    let counter = CountedDrop::new(0);
    let arr: Array<CountedDrop, 10> = Array::from(array::from_fn(|_| counter.clone()));

    drop(arr.into_iter());
    assert_eq!(
        counter.take(),
        10,
        "Dropping an owned iterator should drop all elements."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: Array<CountedDrop, 10> = Array::from(array::from_fn(|_| counter.clone()));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(
        arr,
        (0..5).collect::<Array<usize, 5>>(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4]), arr);

    assert_eq!(
        Borrow::<[usize]>::borrow(&arr),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from([0_usize, 1, 2, 3, 4])),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(&[0_usize, 1, 2, 3, 4][..]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let arr = Array::from([1, 2, 3]);
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(format!("{arr:?}"), "Array { contents: [1, 2, 3], size: 3 }");
}

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType, 5>::new();
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.end() - arr.begin(), 5);
    assert_eq!(
        arr.iter_rev().count(),
        5,
        "Should iterate over the right number of ZST instances."
    );
}
