use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Combines the elements of `self` and `other` pairwise with `combine`. The result is as long
    /// as the shorter of the two, any extra elements of the longer one are dropped.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// assert_eq!(seq.zip(&["a", "b"], |n, s| (*n, *s)), [(1, "a"), (2, "b")]);
    /// ```
    pub fn zip<R, Q>(&self, other: &[R], mut combine: impl FnMut(&T, &R) -> Q) -> Sequence<Q> {
        let mut result = Sequence::with_cap(self.len().min(other.len()));
        for (a, b) in self.iter().zip(other) {
            result.push(combine(a, b));
        }
        result
    }

    /// Pairs up the elements of `self` and `other`. Once the shorter side runs out, the remaining
    /// elements of the longer side are paired with [`None`], so no element is lost.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1]);
    /// assert_eq!(
    ///     seq.tuple_zip(&['x', 'y']),
    ///     [(Some(1), Some('x')), (None, Some('y'))]
    /// );
    /// ```
    pub fn tuple_zip<R: Clone>(&self, other: &[R]) -> Sequence<(Option<T>, Option<R>)>
    where
        T: Clone,
    {
        let mut result = Sequence::with_cap(self.len().max(other.len()));
        let mut left = self.iter();
        let mut right = other.iter();

        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (a, b) => result.push((a.cloned(), b.cloned())),
            }
        }

        result
    }
}
