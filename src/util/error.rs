use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Produced when accessing an element past the end of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of access.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for sequence with {} elements!", self.index, self.len)
    }
}

impl error::Error for IndexOutOfBounds {}

/// Produced when an element can't be converted to the requested type during a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCast {
    /// The position of the first element that failed to convert.
    pub index: usize,
    /// The name of the element type.
    pub from: &'static str,
    /// The name of the requested type.
    pub to: &'static str,
}

impl fmt::Display for InvalidCast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to cast element {} from {} to {}!",
            self.index, self.from, self.to
        )
    }
}

impl error::Error for InvalidCast {}

/// Produced when averaging an empty selection of an integer type.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to average an empty sequence of integers!")]
pub struct DivideByZero;

/// Any error a query can produce, for callers mixing queries behind `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`InvalidCast`].
    InvalidCast(InvalidCast),
    /// See [`DivideByZero`].
    DivideByZero(DivideByZero),
}
