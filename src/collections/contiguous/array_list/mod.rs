//! A module containing [`ArrayList`] and the constants that configure its allocation.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;

pub use array_list::*;
