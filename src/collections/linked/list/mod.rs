mod node;
mod singly_linked_list;
mod tests;

pub(crate) use node::*;
pub use singly_linked_list::*;
