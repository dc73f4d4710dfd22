//! The numeric types that [`Sequence::sum`](crate::Sequence::sum),
//! [`average`](crate::Sequence::average), [`min`](crate::Sequence::min) and
//! [`max`](crate::Sequence::max) aggregate over.
//!
//! Integers and floats behave differently at the edges, and those differences are kept rather
//! than smoothed over:
//! - Averaging no integers is a [`DivideByZero`] error, while averaging no floats is `0.0 / 0.0`,
//!   which is NaN.
//! - `min` and `max` start from the type's greatest and least values (`MAX`/`MIN` for integers,
//!   positive and negative infinity for floats). With nothing to compare against, that starting
//!   value is the result.

use std::ops::Add;

use crate::util::error::DivideByZero;

/// A number that can be summed, averaged and compared by the aggregating queries.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity, which an empty sum evaluates to.
    const ZERO: Self;
    /// The value a `max` scan starts from.
    const LEAST: Self;
    /// The value a `min` scan starts from.
    const GREATEST: Self;

    /// Divides `sum` by `count`, rounding towards zero for integers.
    fn average(sum: Self, count: usize) -> Result<Self, DivideByZero>;
}

macro_rules! impl_numeric_int {
    ($($int:ty),*) => {
        $(
            impl Numeric for $int {
                const ZERO: Self = 0;
                const LEAST: Self = <$int>::MIN;
                const GREATEST: Self = <$int>::MAX;

                fn average(sum: Self, count: usize) -> Result<Self, DivideByZero> {
                    if count == 0 {
                        log::debug!("{}", DivideByZero);
                        return Err(DivideByZero);
                    }
                    match <$int>::try_from(count) {
                        Ok(count) => Ok(sum / count),
                        // Only types narrower than usize get here, and they all widen into i128
                        // without loss. The quotient is no larger in magnitude than the sum.
                        Err(_) => Ok((sum as i128 / count as i128) as $int),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($float:ty),*) => {
        $(
            impl Numeric for $float {
                const ZERO: Self = 0.0;
                const LEAST: Self = <$float>::NEG_INFINITY;
                const GREATEST: Self = <$float>::INFINITY;

                fn average(sum: Self, count: usize) -> Result<Self, DivideByZero> {
                    Ok(sum / count as $float)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
