use std::hash::Hash;

use crate::sequence::{Mapping, Sequence};

impl<T> Sequence<T> {
    /// Inner join of `self` and `other` on the keys extracted by `key_a` and `key_b`. Every pair
    /// with equal keys is passed to `combine`, and the results are ordered by `self` first and then
    /// by `other`.
    ///
    /// This is a nested-loop join, so `key_b` is evaluated `len * other.len()` times.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2]);
    /// assert_eq!(seq.join(&[1, 3], |a| *a, |b| *b, |a, b| a + b), [2]);
    /// ```
    pub fn join<R, S, P>(
        &self,
        other: &[R],
        mut key_a: impl FnMut(&T) -> S,
        mut key_b: impl FnMut(&R) -> S,
        mut combine: impl FnMut(&T, &R) -> P,
    ) -> Sequence<P>
    where
        S: PartialEq,
    {
        let mut result = Sequence::new();
        for a in self.iter() {
            let key = key_a(a);
            for b in other {
                if key == key_b(b) {
                    result.push(combine(a, b));
                }
            }
        }
        result
    }

    /// Pairs `self` with `other` the same way as [`join`](Sequence::join), but groups the combined
    /// results under their shared key instead of flattening them. Keys appear in the order their
    /// first match was found.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let owners = Sequence::from([("ann", 1), ("bob", 2)]);
    /// let pets = [(1, "cat"), (2, "dog"), (1, "fish")];
    /// let joined = owners.group_join(&pets, |o| o.1, |p| p.0, |o, p| format!("{}:{}", o.0, p.1));
    /// assert_eq!(joined[&1], ["ann:cat".to_string(), "ann:fish".to_string()]);
    /// assert_eq!(joined[&2], ["bob:dog".to_string()]);
    /// ```
    pub fn group_join<R, S, P>(
        &self,
        other: &[R],
        mut key_a: impl FnMut(&T) -> S,
        mut key_b: impl FnMut(&R) -> S,
        mut combine: impl FnMut(&T, &R) -> P,
    ) -> Mapping<S, Sequence<P>>
    where
        S: Hash + Eq + Clone,
    {
        let mut groups: Mapping<S, Sequence<P>> = Mapping::new();
        for a in self.iter() {
            let key = key_a(a);
            for b in other {
                if key == key_b(b) {
                    let value = combine(a, b);
                    match groups.get_mut(&key) {
                        Some(group) => group.push(value),
                        None => {
                            groups.insert(key.clone(), Sequence::from([value]));
                        },
                    }
                }
            }
        }
        log::trace!("joined {} elements into {} groups", self.len(), groups.len());
        groups
    }
}
