//! Contiguous collection types. Namely [`ArrayList`], a list that stores its elements in a single
//! buffer and grows it as required.
#![warn(missing_docs)]

pub mod array_list;

#[doc(inline)]
pub use array_list::{ArrayList, DEFAULT_CAP};
