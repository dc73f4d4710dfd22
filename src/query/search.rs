use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Returns true if any element satisfies `pred`. Stops evaluating `pred` at the first match.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 3, 4, 5]);
    /// assert!(seq.exists(|n| n % 2 == 0));
    /// assert!(!seq.exists(|n| *n > 5));
    /// ```
    pub fn exists(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        for item in self.iter() {
            if pred(item) {
                return true;
            }
        }
        false
    }

    /// Returns the first element, in index order, that satisfies `pred`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from(["apple", "banana", "blueberry"]);
    /// assert_eq!(seq.find_first(|s| s.starts_with('b')), Some(&"banana"));
    /// assert_eq!(seq.find_first(|s| s.is_empty()), None);
    /// ```
    pub fn find_first(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.find_first_index(pred).map(|index| &self[index])
    }

    /// Returns the index of the first element that satisfies `pred`, or [`None`] if there isn't
    /// one.
    pub fn find_first_index(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        for (index, item) in self.iter().enumerate() {
            if pred(item) {
                return Some(index);
            }
        }
        None
    }

    /// Returns the last element that satisfies `pred`. Elements are tested from the end of the
    /// Sequence towards the start and the first one to match is returned.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from(["apple", "banana", "blueberry"]);
    /// assert_eq!(seq.find_last(|s| s.starts_with('b')), Some(&"blueberry"));
    /// ```
    pub fn find_last(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.find_last_index(pred).map(|index| &self[index])
    }

    /// Returns the index of the last element that satisfies `pred`, or [`None`] if there isn't
    /// one. `pred` is evaluated in strictly decreasing index order.
    pub fn find_last_index(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        for (index, item) in self.iter().enumerate().rev() {
            if pred(item) {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if every element satisfies `pred`. An empty Sequence always returns true.
    pub fn true_for_all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        !self.exists(|item| !pred(item))
    }

    /// Returns the number of elements that satisfy `pred`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4, 5]);
    /// assert_eq!(seq.count(|n| n % 2 == 1), 3);
    /// ```
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let mut count = 0;
        for item in self.iter() {
            if pred(item) {
                count += 1;
            }
        }
        count
    }

    /// Returns true if any element is equivalent to `item` according to `comparer`, which is
    /// called as `comparer(element, item)`.
    pub fn contains_by(&self, item: &T, mut comparer: impl FnMut(&T, &T) -> bool) -> bool {
        self.exists(|other| comparer(other, item))
    }

    /// Removes every element that satisfies `pred` in place, keeping the relative order of the
    /// remaining elements. Returns the number of elements removed.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(seq.remove_matching(|n| n % 3 == 0), 2);
    /// assert_eq!(seq, [1, 2, 4, 5]);
    /// ```
    pub fn remove_matching(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.inner.retain(|item| !pred(item));
        before - self.len()
    }
}
