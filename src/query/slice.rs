use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Returns a new Sequence without the first `n` elements. Skipping `0` copies the whole
    /// Sequence and skipping `len` or more returns an empty one.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(seq.skip(1), [2, 3, 4]);
    /// assert!(seq.skip(10).is_empty());
    /// ```
    pub fn skip(&self, n: usize) -> Sequence<T> {
        if n == 0 {
            return self.clone();
        }
        if n >= self.len() {
            return Sequence::new();
        }
        Sequence::from_slice(&self[n..])
    }

    /// Returns a new Sequence with only the first `n` elements. Taking `0` returns an empty
    /// Sequence and taking `len` or more copies the whole Sequence.
    pub fn take(&self, n: usize) -> Sequence<T> {
        if n == 0 {
            return Sequence::new();
        }
        if n >= self.len() {
            return self.clone();
        }
        Sequence::from_slice(&self[..n])
    }

    /// Returns a new Sequence with only the last `n` elements, by skipping `len - n`. When `n`
    /// exceeds the length the difference saturates at `0`, so the whole Sequence is returned.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(seq.last(2), [3, 4]);
    /// assert_eq!(seq.last(9), [1, 2, 3, 4]);
    /// ```
    pub fn last(&self, n: usize) -> Sequence<T> {
        self.skip(self.len().saturating_sub(n))
    }

    /// Skips elements while `pred` holds, returning the remainder starting at the first element for
    /// which it doesn't. If every element matches, the result is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 5, 1]);
    /// assert_eq!(seq.skip_while(|n| *n < 3), [5, 1]);
    /// ```
    pub fn skip_while(&self, pred: impl FnMut(&T) -> bool) -> Sequence<T> {
        self.skip(self.prefix_len(pred))
    }

    /// Takes elements while `pred` holds, stopping before the first element for which it doesn't.
    /// If every element matches, the whole Sequence is returned.
    pub fn take_while(&self, pred: impl FnMut(&T) -> bool) -> Sequence<T> {
        self.take(self.prefix_len(pred))
    }

    /// The number of leading elements for which `pred` holds.
    fn prefix_len(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.find_first_index(|item| !pred(item)).unwrap_or(self.len())
    }
}
