//! Query operations over [`Sequence`](crate::Sequence), grouped by kind.
//!
//! # Method
//! Every query is an inherent method on `Sequence<T>`, split across the submodules here so that
//! each group can be read (and feature-gated) on its own. Queries are eager: each one runs to
//! completion and materializes its result, cloning elements out of the source where the result
//! holds elements rather than references.
//!
//! Callbacks (predicates, selectors, comparers and combiners) are taken as [`FnMut`]. They are
//! expected to be pure, but that isn't something the type system can enforce, so the documented
//! order of invocation is part of each query's contract.

mod search;
mod set;
mod slice;
mod transform;
mod tests;
mod zip;

#[cfg(feature = "aggregate")]
mod aggregate;
#[cfg(feature = "aggregate")]
pub mod numeric;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "join")]
mod join;

#[cfg(feature = "aggregate")]
#[doc(inline)]
pub use numeric::Numeric;

#[cfg(feature = "dynamic")]
#[doc(inline)]
pub use dynamic::AsAny;
