//! Two linear collections written from scratch: [`ArrayList`](collections::contiguous::ArrayList),
//! a growable list stored in a single buffer, and
//! [`SinglyLinkedList`](collections::linked::SinglyLinkedList), a chain of exclusively owned
//! nodes.
//!
//! # Error Handling
//! Every operation that can fail because of its arguments comes in two forms. The `try_` form
//! returns a [`Result`] with a strongly typed error, such as
//! [`IndexOutOfBounds`](collections::contiguous::array_list::IndexOutOfBounds), and leaves the
//! collection untouched on failure. The plain form panics with the message of that same error,
//! which is usually more ergonomic when the caller has already checked the index.
//!
//! Errors are structs (or enums of structs for static dispatch) that implement
//! [`Error`](std::error::Error).
//!
//! # Features
//! - `contiguous`: [`ArrayList`](collections::contiguous::ArrayList).
//! - `linked`: [`SinglyLinkedList`](collections::linked::SinglyLinkedList).
//!
//! Both are enabled by default through `collections-all`.
//!
//! # Logging
//! Reallocations and clears are reported through the [`log`] facade at `trace` and `debug` level.
//! No logger is installed by this crate.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
