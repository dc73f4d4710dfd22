use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Compares two sequences position by position. Returns false straight away if the lengths
    /// differ, otherwise returns true only if `comparer(self[i], other[i])` holds for every index.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let words = Sequence::from(["One", "two"]);
    /// let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
    /// assert!(words.equals(&["one", "TWO"], ignore_case));
    /// assert!(!words.equals(&["two", "one"], ignore_case));
    /// ```
    pub fn equals<R>(&self, other: &[R], mut comparer: impl FnMut(&T, &R) -> bool) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (a, b) in self.iter().zip(other) {
            if !comparer(a, b) {
                return false;
            }
        }
        true
    }

    /// Returns the elements of `self` with equivalent later elements removed. Each element is
    /// compared against every element accepted so far as `comparer(item, accepted)` and kept only
    /// if none of them match, so the first occurrence of each element wins.
    ///
    /// This is `O(n^2)`, because `comparer` isn't required to agree with any hash or ordering.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([3, 1, 3, 2, 1]);
    /// assert_eq!(seq.distinct(|a, b| a == b), [3, 1, 2]);
    /// ```
    pub fn distinct(&self, comparer: impl FnMut(&T, &T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        distinct_from(self.iter(), comparer)
    }

    /// Returns every element of `self` that has at least one match in `other`, where a match is
    /// `comparer(item, other_item)`. The order of `self` is kept, as are any duplicates in `self`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 2, 3]);
    /// assert_eq!(seq.intersect(&[2, 3, 4], |a, b| a == b), [2, 2, 3]);
    /// ```
    pub fn intersect<R>(&self, other: &[R], mut comparer: impl FnMut(&T, &R) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        self.iter()
            .filter(|item| other.iter().any(|other_item| comparer(*item, other_item)))
            .cloned()
            .collect()
    }

    /// Returns every element of `self` that has no match in `other`, where a match is
    /// `comparer(item, other_item)`. The order of `self` is kept, as are any duplicates in `self`.
    pub fn except<R>(&self, other: &[R], mut comparer: impl FnMut(&T, &R) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        self.iter()
            .filter(|item| !other.iter().any(|other_item| comparer(*item, other_item)))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` followed by the elements of `other`, with no deduplication.
    pub fn concat(&self, other: &[T]) -> Sequence<T>
    where
        T: Clone,
    {
        let mut result = Sequence::with_cap(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements of `self` followed by the elements of `other`, deduplicated with
    /// [`distinct`](Sequence::distinct) using `comparer`. Use [`concat`](Sequence::concat) to keep
    /// duplicates.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1, 2, 2]);
    /// assert_eq!(seq.union(&[3, 1, 4], |a, b| a == b), [1, 2, 3, 4]);
    /// ```
    pub fn union(&self, other: &[T], comparer: impl FnMut(&T, &T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        distinct_from(self.iter().chain(other), comparer)
    }
}

fn distinct_from<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    mut comparer: impl FnMut(&T, &T) -> bool,
) -> Sequence<T> {
    let mut result: Sequence<T> = Sequence::new();
    for item in items {
        if !result.exists(|accepted| comparer(item, accepted)) {
            result.push(item.clone());
        }
    }
    result
}
