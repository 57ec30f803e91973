//! Linked collection types. Currently only [`SinglyLinkedList`], where each node owns the one that
//! follows it.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
