//! General-purpose linear collection types.
//!
//! Neither collection exposes iterators; elements are reached by index, through methods like
//! `get` and `set` or the [`Index`](std::ops::Index) operators.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
