use std::iter;

use rstest::rstest;

use crate::query::Numeric;
use crate::{DivideByZero, QueryError, Sequence};

#[test]
fn test_map_reduce() {
    let empty = Sequence::<i32>::new();
    assert_eq!(empty.map_reduce(|n| *n, |a, b| a + b), None);
    assert_eq!(Sequence::from([5]).map_reduce(|n| *n, |a, b| a + b), Some(5));

    let words = Sequence::from(["a", "b", "c"]);
    assert_eq!(
        words.map_reduce(|s| s.to_string(), |a, b| format!("({a}{b})")),
        Some("((ab)c)".to_string()),
        "map_reduce should fold from the left, starting with the first mapped element."
    );
}

#[test]
fn test_group_by() {
    let groups = Sequence::from([1, 2, 3, 4]).group_by(|n| n % 2);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&0], [2, 4]);
    assert_eq!(groups[&1], [1, 3]);
    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        [1, 0],
        "Groups should appear in first-seen key order."
    );

    let words = Sequence::from(["bee", "ant", "bat", "cow", "asp"]);
    let by_initial = words.group_by(|w| w.chars().next());
    assert_eq!(by_initial[&Some('b')], ["bee", "bat"]);
    assert_eq!(by_initial[&Some('a')], ["ant", "asp"]);
    assert_eq!(by_initial[&Some('c')], ["cow"]);

    assert!(Sequence::<i32>::new().group_by(|n| *n).is_empty());
}

#[test]
fn test_sum() {
    let seq = Sequence::from([(1, 0.5_f32), (2, 1.5), (3, 2.0)]);

    assert_eq!(seq.sum(|p| p.0), 6);
    assert_eq!(seq.sum(|p| p.1), 4.0);
    assert_eq!(seq.sum(|p| p.0 as u64), 6_u64);
    assert_eq!(Sequence::<i32>::new().sum(|n| *n), 0);
}

#[test]
fn test_average() {
    let seq = Sequence::from([1, 2, 4]);

    assert_eq!(seq.average(|n| *n), Ok(2), "Integer averages should be truncated.");
    assert_eq!(seq.average(|n| -*n), Ok(-2));
    assert_eq!(seq.average(|n| *n as f64 * 3.0), Ok(7.0));

    let empty = Sequence::<i32>::new();
    assert_eq!(empty.average(|n| *n), Err(DivideByZero));
    assert_eq!(empty.average(|n| *n as u8), Err(DivideByZero));
    assert!(
        empty.average(|n| *n as f64).is_ok_and(f64::is_nan),
        "Averaging no floats should be 0/0 rather than an error."
    );
    assert!(empty.average(|n| *n as f32).is_ok_and(f32::is_nan));

    let error: QueryError = empty.average(|n| *n).unwrap_err().into();
    assert!(error.is_divide_by_zero());
}

#[test]
fn test_average_with_unrepresentable_count() {
    let seq: Sequence<i8> = iter::repeat_n(0, 300).chain([100]).collect();

    assert_eq!(seq.average(|n| *n), Ok(0));
}

#[test]
fn test_average_of_least_value_with_unrepresentable_count() {
    let seq: Sequence<i8> = iter::once(i8::MIN).chain(iter::repeat_n(0, 127)).collect();
    assert_eq!(
        seq.average(|n| *n),
        Ok(-1),
        "MIN averaged over |MIN| elements should truncate to -1, not 0."
    );

    let seq: Sequence<i16> = iter::once(i16::MIN).chain(iter::repeat_n(0, 32767)).collect();
    assert_eq!(seq.average(|n| *n), Ok(-1));

    let seq: Sequence<i8> = iter::once(i8::MIN).chain(iter::repeat_n(0, 128)).collect();
    assert_eq!(seq.average(|n| *n), Ok(0));
}

#[rstest]
#[case::int(Sequence::from([3, -7, 5]), -7, 5)]
#[case::single(Sequence::from([42]), 42, 42)]
fn test_min_max_int(#[case] seq: Sequence<i32>, #[case] min: i32, #[case] max: i32) {
    assert_eq!(seq.min(|n| *n), min);
    assert_eq!(seq.max(|n| *n), max);
}

#[test]
fn test_min_max_float() {
    let seq = Sequence::from([2.5_f64, -1.0, 8.25]);

    assert_eq!(seq.min(|n| *n), -1.0);
    assert_eq!(seq.max(|n| *n), 8.25);
}

#[test]
fn test_min_max_sentinels() {
    let empty = Sequence::<()>::new();

    assert_eq!(empty.min(|_| 0_i32), i32::MAX, "Empty min should be the greatest value.");
    assert_eq!(empty.max(|_| 0_i32), i32::MIN, "Empty max should be the least value.");
    assert_eq!(empty.min(|_| 0_u8), u8::MAX);
    assert_eq!(empty.max(|_| 0_u8), u8::MIN);
    assert_eq!(empty.min(|_| 0.0_f64), f64::INFINITY);
    assert_eq!(empty.max(|_| 0.0_f64), f64::NEG_INFINITY);
    assert_eq!(empty.min(|_| 0.0_f32), f32::INFINITY);
    assert_eq!(empty.max(|_| 0.0_f32), f32::NEG_INFINITY);

    assert_eq!(<i64 as Numeric>::GREATEST, i64::MAX);
    assert_eq!(<f32 as Numeric>::LEAST, f32::NEG_INFINITY);
}
