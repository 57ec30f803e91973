use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Link, Node};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A list with links in one direction, where each node exclusively owns the node that follows
/// it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `set` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `sort` | `O(n^2)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let (value, next) = self.head.take()?.into_parts();
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Adds the provided element to the back of the SinglyLinkedList, walking the entire chain to
    /// find the last node.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(5);
    /// list.push_back(10);
    /// assert_eq!(list.to_string(), "(5) -> (10)");
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Inserts the provided element so that it is found at `index`, before the element that was
    /// previously there. An `index` equal to the length adds the element to the back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [5, 10, 3].into_iter().collect();
    /// list.insert(1, 7);
    /// assert_eq!(list.to_string(), "(5) -> (7) -> (10) -> (3)");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element at `index`, returning an [`Err`] rather than panicking if
    /// `index > len`. The list is left unchanged if an error is returned.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        let link = self.link_at_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        *link = Some(Node::boxed(value, link.take()));

        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let list: SinglyLinkedList<_> = [5, 10, 3].into_iter().collect();
    /// assert_eq!(list.try_get(2), Ok(&3));
    /// assert!(list.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.checked_seek(index)?.value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(&mut self.checked_seek_mut(index)?.value)
    }

    /// Overwrites the element at `index` in place, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn set(&mut self, index: usize, new_value: T) -> T {
        self.try_set(index, new_value).throw()
    }

    /// Overwrites the element at `index`, returning an [`Err`] rather than panicking if `index` is
    /// out of bounds.
    pub fn try_set(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Unlinks the node at `index`, joining its predecessor to its successor, and returns its
    /// element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [5, 7, 10, 3].into_iter().collect();
    /// assert_eq!(list.remove(1), 7);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] rather than panicking if `index` is out
    /// of bounds. The list is left unchanged if an error is returned.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;

        let link = self.link_at_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        let (value, next) = link.take().ok_or(IndexOutOfBounds { index, len })?.into_parts();
        *link = next;

        self.len -= 1;
        Ok(value)
    }

    /// Drops every node in the list, leaving it empty.
    pub fn clear(&mut self) {
        log::debug!("clearing SinglyLinkedList of {} elements", self.len);
        self.unlink_all();
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.values().position(|element| element == item)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T: Ord> SinglyLinkedList<T> {
    /// Sorts the list into ascending order with a selection sort. For each node, the smallest
    /// element in the rest of the chain is swapped into it, so values move between nodes but no
    /// links are changed and nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [5, 10, 3, 7].into_iter().collect();
    /// list.sort();
    /// assert_eq!(list.to_string(), "(3) -> (5) -> (7) -> (10)");
    /// ```
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }

        let mut curr = self.head.as_deref_mut();
        while let Some(Node { value, next }) = curr {
            let mut min: Option<&mut T> = None;

            let mut scan = next.as_deref_mut();
            while let Some(Node { value: candidate, next: rest }) = scan {
                let smallest = min.as_deref().unwrap_or(value);
                if *candidate < *smallest {
                    min = Some(candidate);
                }
                scan = rest.as_deref_mut();
            }

            if let Some(min) = min {
                mem::swap(value, min);
            }
            curr = next.as_deref_mut();
        }
    }
}

impl<T> SinglyLinkedList<T> {
    /// Drops the chain one node at a time so that long lists aren't dropped recursively.
    pub(crate) fn unlink_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<&Node<T>, IndexOutOfBounds> {
        self.check_index(index)?;
        self.seek(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    pub(crate) fn checked_seek_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Node<T>, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;
        self.link_at_mut(index)
            .and_then(|link| link.as_deref_mut())
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Walks `index` links from the head, returning the node found there.
    pub(crate) fn seek(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    /// Returns the link which owns the node at `index`. For `index == len`, this is the empty
    /// link after the last node.
    pub(crate) fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        Node::follow(&mut self.head, index)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> + Clone {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| &node.value)
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut link = &self.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        assert_eq!(count, self.len);
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let SinglyLinkedList { head, len } = self;

        // Count each node as it is linked, in case the iterator panics.
        if let Some(mut link) = Node::follow(head, *len) {
            for value in iter {
                link = &mut link.insert(Node::boxed(value, None)).next;
                *len += 1;
            }
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.values() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self.values()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.values().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}
