use std::hash::Hash;

use crate::query::numeric::Numeric;
use crate::sequence::{Mapping, Sequence};
use crate::util::error::DivideByZero;

impl<T> Sequence<T> {
    /// Maps every element with `map`, then folds the results from the left with `reduce`, starting
    /// from the mapped first element. Returns [`None`] for an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from(["a", "bb", "ccc"]);
    /// assert_eq!(seq.map_reduce(|s| s.len(), |a, b| a * b), Some(6));
    /// assert_eq!(Sequence::<&str>::new().map_reduce(|s| s.len(), |a, b| a * b), None);
    /// ```
    pub fn map_reduce<R>(
        &self,
        map: impl FnMut(&T) -> R,
        reduce: impl FnMut(R, R) -> R,
    ) -> Option<R> {
        let mut mapped = self.iter().map(map);
        let first = mapped.next()?;
        Some(mapped.fold(first, reduce))
    }

    /// Partitions the elements by the key `key` extracts from each. Groups appear in the order
    /// their keys were first seen, and each group keeps the input order of its elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let groups = Sequence::from([1, 2, 3, 4]).group_by(|n| n % 2);
    /// assert_eq!(groups[&1], [1, 3]);
    /// assert_eq!(groups[&0], [2, 4]);
    /// ```
    pub fn group_by<K>(&self, mut key: impl FnMut(&T) -> K) -> Mapping<K, Sequence<T>>
    where
        T: Clone,
        K: Hash + Eq,
    {
        let mut groups = Mapping::new();
        for item in self.iter() {
            groups
                .entry(key(item))
                .or_insert_with(Sequence::new)
                .push(item.clone());
        }
        log::trace!("grouped {} elements into {} groups", self.len(), groups.len());
        groups
    }

    /// Adds up the values `selector` picks from each element. An empty Sequence sums to zero.
    ///
    /// # Panics
    /// Integer overflow panics in debug builds, as it would with `+`.
    pub fn sum<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> N {
        self.iter().map(selector).fold(N::ZERO, |acc, value| acc + value)
    }

    /// Returns the mean of the values `selector` picks from each element.
    ///
    /// Integer averages are truncated towards zero and averaging an empty Sequence of integers
    /// returns [`DivideByZero`]. Float averages never fail: an empty Sequence averages to NaN.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 4]);
    /// assert_eq!(seq.average(|n| *n), Ok(2));
    /// assert_eq!(seq.average(|n| *n as f64), Ok(7.0 / 3.0));
    ///
    /// let empty = Sequence::<i32>::new();
    /// assert!(empty.average(|n| *n).is_err());
    /// assert!(empty.average(|n| *n as f32).unwrap().is_nan());
    /// ```
    ///
    /// # Panics
    /// Integer overflow while summing panics in debug builds, as it would with `+`.
    pub fn average<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> Result<N, DivideByZero> {
        N::average(self.sum(selector), self.len())
    }

    /// Returns the smallest value `selector` picks from any element. The scan starts from
    /// [`Numeric::GREATEST`], which is also what an empty Sequence returns.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let empty = Sequence::<i32>::new();
    /// assert_eq!(empty.min(|n| *n), i32::MAX);
    /// assert_eq!(empty.min(|n| *n as f64), f64::INFINITY);
    /// assert_eq!(Sequence::from([3, -2, 8]).min(|n| *n), -2);
    /// ```
    pub fn min<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> N {
        self.iter()
            .map(selector)
            .fold(N::GREATEST, |acc, value| if value < acc { value } else { acc })
    }

    /// Returns the largest value `selector` picks from any element. The scan starts from
    /// [`Numeric::LEAST`], which is also what an empty Sequence returns.
    pub fn max<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> N {
        self.iter()
            .map(selector)
            .fold(N::LEAST, |acc, value| if value > acc { value } else { acc })
    }
}
