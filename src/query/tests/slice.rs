use rstest::rstest;

use crate::Sequence;

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(5)]
fn test_take_and_skip_recombine(#[case] n: usize) {
    let seq = Sequence::from([1, 2, 3, 4, 5]);

    assert_eq!(
        seq.take(n).concat(&seq.skip(n)),
        seq,
        "take(n) followed by skip(n) should rebuild the sequence."
    );
}

#[test]
fn test_boundaries() {
    let seq = Sequence::from(['a', 'b', 'c']);

    assert!(seq.take(0).is_empty());
    assert_eq!(seq.skip(0), seq);
    assert_eq!(seq.take(seq.len()), seq);
    assert!(seq.skip(seq.len()).is_empty());
    assert_eq!(seq.take(100), seq);
    assert!(seq.skip(100).is_empty());

    let empty = Sequence::<char>::new();
    assert!(empty.take(2).is_empty());
    assert!(empty.skip(2).is_empty());
}

#[test]
fn test_last() {
    let seq = Sequence::from([1, 2, 3, 4]);

    assert_eq!(seq.last(1), [4]);
    assert_eq!(seq.last(3), [2, 3, 4]);
    assert!(seq.last(0).is_empty());
    assert_eq!(seq.last(4), seq);
    assert_eq!(
        seq.last(10),
        seq,
        "Asking for more elements than exist should return the whole sequence."
    );
}

#[test]
fn test_skip_and_take_while() {
    let seq = Sequence::from([2, 4, 5, 6, 7]);
    let even = |n: &i32| n % 2 == 0;

    assert_eq!(seq.skip_while(even), [5, 6, 7]);
    assert_eq!(seq.take_while(even), [2, 4]);

    let all_even = Sequence::from([2, 4]);
    assert!(
        all_even.skip_while(even).is_empty(),
        "Skipping while every element matches should leave nothing."
    );
    assert_eq!(all_even.take_while(even), all_even);

    let none_even = Sequence::from([1, 3]);
    assert_eq!(none_even.skip_while(even), none_even);
    assert!(none_even.take_while(even).is_empty());
}
