use std::any;

use crate::sequence::Sequence;
use crate::util::error::InvalidCast;

impl<T> Sequence<T> {
    /// Maps every element through `selector`, keeping order and length.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from(["a", "bcd", "ef"]);
    /// assert_eq!(seq.select(|s| s.len()), [1, 3, 2]);
    /// ```
    pub fn select<R>(&self, selector: impl FnMut(&T) -> R) -> Sequence<R> {
        self.iter().map(selector).collect()
    }

    /// Maps every element to any number of results and flattens them, in order.
    pub fn select_many<R, I>(&self, selector: impl FnMut(&T) -> I) -> Sequence<R>
    where
        I: IntoIterator<Item = R>,
    {
        self.iter().flat_map(selector).collect()
    }

    /// Returns a new Sequence containing clones of the elements that satisfy `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        self.iter().filter(|item| pred(*item)).cloned().collect()
    }

    /// Converts every element to `R` with [`TryFrom`]. If any element fails to convert, no result
    /// is produced and the returned [`InvalidCast`] names the first element that failed.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([1_i64, 200, 3]);
    /// assert_eq!(seq.cast::<i16>().unwrap(), [1, 200, 3]);
    ///
    /// let error = seq.cast::<i8>().unwrap_err();
    /// assert_eq!(error.index, 1);
    /// ```
    pub fn cast<R>(&self) -> Result<Sequence<R>, InvalidCast>
    where
        T: Clone,
        R: TryFrom<T>,
    {
        let mut result = Sequence::with_cap(self.len());
        for (index, item) in self.iter().enumerate() {
            match R::try_from(item.clone()) {
                Ok(value) => result.push(value),
                Err(_) => return Err(invalid_cast::<T, R>(index)),
            }
        }
        Ok(result)
    }

    /// Converts every element that can be converted to `R` with [`TryFrom`], silently leaving out
    /// those that can't.
    ///
    /// # Examples
    /// ```
    /// # use sequence_query::Sequence;
    /// let seq = Sequence::from([-1_i32, 7, 300]);
    /// assert_eq!(seq.of_type::<u8>(), [7]);
    /// ```
    pub fn of_type<R>(&self) -> Sequence<R>
    where
        T: Clone,
        R: TryFrom<T>,
    {
        self.iter()
            .filter_map(|item| R::try_from(item.clone()).ok())
            .collect()
    }
}

pub(crate) fn invalid_cast<T, R>(index: usize) -> InvalidCast {
    let error = InvalidCast {
        index,
        from: any::type_name::<T>(),
        to: any::type_name::<R>(),
    };
    log::debug!("{error}");
    error
}
