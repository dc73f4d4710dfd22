//! The owned containers that queries consume and produce. Namely [`Sequence`] for ordered elements
//! and [`Mapping`] for the keyed results of grouping and joining.
#![warn(missing_docs)]

mod mapping;
mod sequence;
mod tests;

pub use mapping::*;
pub use sequence::*;
