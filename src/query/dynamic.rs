//! Runtime type filtering for sequences of type-erased elements.
//!
//! [`Sequence::cast`] and [`Sequence::of_type`] convert between static types. When the element type
//! itself is erased (a `Box<dyn Any>` and friends), the only information left is the [`TypeId`] of
//! each value, which is what [`Sequence::cast_any`] and [`Sequence::of_type_any`] check against.
//!
//! [`TypeId`]: std::any::TypeId

use std::any::{self, Any};
use std::rc::Rc;
use std::sync::Arc;

use crate::query::transform::invalid_cast;
use crate::sequence::Sequence;
use crate::util::error::InvalidCast;

/// A type-erased handle that can expose the value it points to as `&dyn Any`.
pub trait AsAny {
    /// Returns the pointed-to value, so its [`TypeId`](std::any::TypeId) can be checked.
    fn as_any(&self) -> &dyn Any;
}

impl AsAny for Box<dyn Any> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl AsAny for Box<dyn Any + Send> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl AsAny for Box<dyn Any + Send + Sync> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl AsAny for Rc<dyn Any> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl AsAny for Arc<dyn Any + Send + Sync> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl AsAny for &dyn Any {
    fn as_any(&self) -> &dyn Any {
        *self
    }
}

impl<T: AsAny> Sequence<T> {
    /// Clones every element out as an `R`, checking each element's runtime type. If any element
    /// isn't an `R`, no result is produced and the returned [`InvalidCast`] names the first one.
    ///
    /// # Examples
    /// ```
    /// # use std::any::Any;
    /// # use sequence_query::Sequence;
    /// let seq: Sequence<Box<dyn Any>> = [1_u32, 2]
    ///     .into_iter()
    ///     .map(|n| Box::new(n) as Box<dyn Any>)
    ///     .collect();
    /// assert_eq!(seq.cast_any::<u32>().unwrap(), [1, 2]);
    /// assert!(seq.cast_any::<i32>().is_err());
    /// ```
    pub fn cast_any<R: Any + Clone>(&self) -> Result<Sequence<R>, InvalidCast> {
        let mut result = Sequence::with_cap(self.len());
        for (index, item) in self.iter().enumerate() {
            match item.as_any().downcast_ref::<R>() {
                Some(value) => result.push(value.clone()),
                None => return Err(invalid_cast::<T, R>(index)),
            }
        }
        Ok(result)
    }

    /// Clones out every element whose runtime type is `R`, leaving out all others.
    ///
    /// # Examples
    /// ```
    /// # use std::any::Any;
    /// # use sequence_query::Sequence;
    /// let mut seq: Sequence<Box<dyn Any>> = Sequence::new();
    /// seq.push(Box::new("one"));
    /// seq.push(Box::new(2_u8));
    /// seq.push(Box::new("three"));
    /// assert_eq!(seq.of_type_any::<&str>(), ["one", "three"]);
    /// ```
    pub fn of_type_any<R: Any + Clone>(&self) -> Sequence<R> {
        log::trace!(
            "filtering {} elements of {} to {}",
            self.len(),
            any::type_name::<T>(),
            any::type_name::<R>()
        );
        self.iter()
            .filter_map(|item| item.as_any().downcast_ref::<R>())
            .cloned()
            .collect()
    }
}
