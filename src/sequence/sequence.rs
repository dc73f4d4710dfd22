use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::slice;
use std::vec;

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An ordered, finite collection of elements that every query in this crate operates on.
///
/// A Sequence dereferences to `[T]`, so slice methods (`len`, `iter`, `first`, indexing and so on)
/// are available directly. Queries never consume or mutate the Sequence they are called on, with
/// the exception of [`remove_matching`](Sequence::remove_matching), which takes `&mut self`. Every
/// other query builds a fresh result.
///
/// Sequence intentionally doesn't implement [`Ord`], otherwise `Ord::min` and `Ord::max` would be
/// picked over the aggregating [`min`](Sequence::min) and [`max`](Sequence::max) queries.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `m`: The number of items in the second Sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `exists`, `find_*`, `count` | `O(n)` |
/// | `remove_matching` | `O(n)` |
/// | `equals` | `O(n)` |
/// | `distinct` | `O(n^2)` |
/// | `intersect`, `except` | `O(n*m)` |
/// | `union` | `O((n+m)^2)` |
/// | `join`, `group_join` | `O(n*m)` |
/// | `group_by` | `O(n)` |
/// | `skip`, `take`, `last` | `O(n)` |
/// | `zip`, `tuple_zip` | `O(max(n, m))` |
pub struct Sequence<T> {
    pub(crate) inner: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new, empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> Sequence<T> {
        Sequence { inner: Vec::new() }
    }

    /// Creates a new Sequence with room for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the Sequence.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes the provided value onto the end of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let mut seq = Sequence::new();
    /// for i in 0..3 {
    ///     seq.push(i);
    /// }
    /// assert_eq!(seq, [0, 1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Returns the contents of the Sequence as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Consumes the Sequence, returning its elements as a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error describing
    /// the failed access.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from(['a', 'b']);
    /// assert_eq!(seq.try_element_at(1), Ok(&'b'));
    /// assert!(seq.try_element_at(2).is_err());
    /// ```
    pub fn try_element_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.inner.get(index).ok_or_else(|| {
            let error = IndexOutOfBounds {
                index,
                len: self.len(),
            };
            log::debug!("{error}");
            error
        })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, with the message of the [`IndexOutOfBounds`] error.
    pub fn element_at(&self, index: usize) -> &T {
        self.try_element_at(index).throw()
    }

    /// Creates a new Sequence by cloning all elements of the provided slice.
    pub(crate) fn from_slice(slice: &[T]) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence {
            inner: slice.to_vec(),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            inner: self.inner.clone(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence { inner: value }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence {
            inner: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence::from_slice(value)
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.into_vec()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
