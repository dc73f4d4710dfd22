#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let from_array = Sequence::from([1, 2, 3]);
    let from_vec = Sequence::from(vec![1, 2, 3]);
    let from_slice = Sequence::from(&[1, 2, 3][..]);
    let collected: Sequence<_> = (1..=3).collect();

    assert_eq!(
        from_array, from_vec,
        "Different construction methods should produce equal results."
    );
    assert_eq!(from_array, from_slice);
    assert_eq!(from_array, collected);
    assert_eq!(from_array.len(), 3);
    assert!(Sequence::<u8>::default().is_empty());

    let mut extended = Sequence::with_cap(1);
    extended.push(1);
    extended.extend([2, 3]);
    assert_eq!(extended, from_array, "Push and extend should append in order.");
}

#[test]
fn test_equality_and_hash() {
    let seq = Sequence::from([0_usize, 1, 2]);

    assert_eq!(&*seq, &[0, 1, 2], "Deref equality should be upheld.");
    assert_eq!(seq.as_slice(), &[0, 1, 2]);
    assert_ne!(seq, Sequence::from([0, 2, 1]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&seq),
        state.hash_one(Sequence::from([0_usize, 1, 2])),
        "Equal sequences should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&seq),
        state.hash_one([0_usize, 1, 2].as_slice()),
        "Slice hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let seq = Sequence::from(["a", "b", "c"]);

    let borrowed: Vec<&&str> = (&seq).into_iter().collect();
    assert_eq!(borrowed, [&"a", &"b", &"c"]);

    let owned: Vec<&str> = seq.clone().into_iter().rev().collect();
    assert_eq!(owned, ["c", "b", "a"], "Owned iteration should yield every element.");

    assert_eq!(Vec::from(seq), ["a", "b", "c"]);
}

#[test]
fn test_element_at() {
    let seq = Sequence::from(['x', 'y']);

    assert_eq!(seq.element_at(1), &'y');
    assert_eq!(
        seq.try_element_at(5),
        Err(IndexOutOfBounds { index: 5, len: 2 }),
        "Out of bounds access should describe the index and length."
    );

    assert_panics!(
        {
            let seq = Sequence::from(['x', 'y']);
            seq.element_at(2);
        },
        contains = "Index 2 out of bounds"
    );
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Sequence::from([1, 2])), "[1, 2]");
    assert_eq!(format!("{:?}", Sequence::<u8>::new()), "[]");
}
