use indexmap::IndexMap;

/// An associative container from unique keys to values, produced by grouping and joining queries.
///
/// Keys iterate in the order they were first seen while scanning the input, so a grouping over the
/// same input always produces the same iteration order.
///
/// # Examples
/// ```
/// # use sequence_query::{Mapping, Sequence};
/// let groups: Mapping<bool, Sequence<u8>> = Sequence::from([1_u8, 2, 3]).group_by(|n| n % 2 == 0);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [false, true]);
/// ```
pub type Mapping<K, V> = IndexMap<K, V>;
