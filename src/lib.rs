//! This crate adds LINQ-style queries (searching, set operations, grouping, joining, pagination and
//! numeric aggregation) to an ordered, in-memory [`Sequence`].
//!
//! # Purpose
//! Iterator adapters cover a lot of this ground already, but some queries keep coming up in
//! application code with very specific edge-case behavior: equality under a caller-supplied
//! comparer, deduplication without a hash, joins between two collections of different types,
//! averages that treat integers and floats differently. This crate pins those contracts down in one
//! place, with the edge cases documented and tested rather than left to whoever writes the fold.
//!
//! # Method
//! Every query is an inherent method on [`Sequence<T>`], implemented in the [`query`] module and
//! grouped by kind. Queries are eager and pure: they borrow the Sequence, run to completion and
//! return a freshly built result. The only mutating query,
//! [`remove_matching`](Sequence::remove_matching), takes `&mut self`, so exclusive access is
//! checked by the compiler rather than left to the caller.
//!
//! Queries that can find nothing return [`Option`]s (including indices, where other libraries
//! reach for `-1`). Boundary behavior that is well defined (empty results, the sentinel extremes
//! returned by [`min`](Sequence::min) and [`max`](Sequence::max) for an empty Sequence) is part of
//! the contract and is not treated as an error.
//!
//! # Error Handling
//! Only two queries can fail, and both return strongly typed errors: casting returns
//! [`InvalidCast`] and averaging an empty Sequence of integers returns [`DivideByZero`]. Each error
//! is a struct implementing [`Error`](std::error::Error), and [`QueryError`] wraps all of them for
//! callers that want to use `?` across different queries.
//!
//! Failures are reported through the [`log`] facade at `debug` level. This crate never installs a
//! logger itself.
//!
//! # Features
//! - `aggregate`: [`map_reduce`](Sequence::map_reduce), [`group_by`](Sequence::group_by) and the
//!   numeric aggregates over [`Numeric`](query::Numeric) types.
//! - `join`: [`join`](Sequence::join) and [`group_join`](Sequence::group_join).
//! - `dynamic`: [`cast_any`](Sequence::cast_any) and [`of_type_any`](Sequence::of_type_any) for
//!   type-erased elements.
//!
//! All of them are enabled by default through `query-all`.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod query;
pub mod sequence;

pub(crate) mod util;

#[doc(inline)]
pub use sequence::{Mapping, Sequence};
#[doc(inline)]
pub use util::error::{DivideByZero, IndexOutOfBounds, InvalidCast, QueryError};
