use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, InvalidCapacity, InvalidOrCapOverflow,
};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// The capacity of an ArrayList created with [`ArrayList::new`] or [`Default::default`].
pub const DEFAULT_CAP: usize = 10;

const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous list backed by a buffer of slots.
///
/// Slots from `len` up to `cap` are always empty, so no element can be observed outside of the
/// logical contents of the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `remove_item` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(cap)` |
/// | `sort` | `O(n log n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, the backing buffer is
/// doubled in size, taking `O(n)`.
pub struct ArrayList<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::{ArrayList, DEFAULT_CAP};
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList {
            slots: alloc_slots(DEFAULT_CAP),
            len: 0,
        }
    }

    /// Creates a new, empty ArrayList with exactly the provided capacity.
    ///
    /// # Panics
    /// Panics if `cap` is 0 or the memory layout of the ArrayList would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(3);
    /// list.extend([1_u8, 2, 3]);
    /// assert_eq!(list.cap(), 3);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList::try_with_cap(cap).throw()
    }

    /// Creates a new, empty ArrayList with exactly the provided capacity, returning an [`Err`]
    /// rather than panicking if the capacity is 0 or too large to allocate.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// assert!(ArrayList::<u8>::try_with_cap(0).is_err());
    /// assert!(ArrayList::<u64>::try_with_cap(usize::MAX / 2).is_err());
    /// assert_eq!(ArrayList::<u8>::try_with_cap(4).unwrap().cap(), 4);
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, InvalidOrCapOverflow> {
        if cap == 0 {
            return Err(InvalidCapacity { cap }.into());
        }

        check_cap::<T>(cap)?;

        Ok(ArrayList {
            slots: alloc_slots(cap),
            len: 0,
        })
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    /// list.push(1);
    /// assert!(!list.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated for the ArrayList.
    pub const fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Appends the provided value to the end of the ArrayList, doubling the capacity if required.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(1);
    /// for i in 0..3 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list.get(2), &2);
    /// assert_eq!(list.cap(), 4);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Appends the provided value to the end of the ArrayList, returning an [`Err`] rather than
    /// panicking if the capacity can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.ensure_cap()?;
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Inserts the provided value at `index`, shifting every following element one slot to the
    /// right. An `index` equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if `index > len` or if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = [5, 10, 3].into_iter().collect();
    /// list.insert(1, 7);
    /// assert_eq!(list.to_string(), "[5, 7, 10, 3]");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] rather than panicking on a
    /// failure. The ArrayList is left unchanged if an error is returned.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }.into());
        }

        self.ensure_cap()?;

        let mut prev = Some(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.slots[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] rather than panicking
    /// on a failure.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.slots[index].as_ref().ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] rather than
    /// panicking on a failure.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;
        self.slots[index].as_mut().ok_or(IndexOutOfBounds { index, len })
    }

    /// Overwrites the element at `index` with `new_value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "abc".chars().collect();
    /// assert_eq!(list.set(1, 'z'), 'b');
    /// assert_eq!(list.to_string(), "[a, z, c]");
    /// ```
    pub fn set(&mut self, index: usize, new_value: T) -> T {
        self.try_set(index, new_value).throw()
    }

    /// Overwrites the element at `index` with `new_value`, returning an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Removes and returns the element at `index`, shifting every following element one slot to
    /// the left. The vacated slot at the end of the list is emptied.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = [5, 7, 10, 3].into_iter().collect();
    /// assert_eq!(list.remove(1), 7);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.to_string(), "[5, 10, 3]");
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds. The ArrayList is left unchanged if an error is returned.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;

        let mut next = None;
        // Iterate backwards to index.
        for i in (index..len).rev() {
            next = mem::replace(&mut self.slots[i], next);
        }

        self.len -= 1;
        next.ok_or(IndexOutOfBounds { index, len })
    }

    /// Empties every slot and resets the length to 0. The capacity of the list is retained.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        log::debug!("cleared ArrayList of {} elements, keeping capacity {}", self.len, self.cap());
        self.len = 0;
    }

    /// Ensures that there is room for at least one more element, doubling the capacity if the
    /// list is full.
    pub(crate) fn ensure_cap(&mut self) -> Result<(), CapacityOverflow> {
        if self.len < self.cap() {
            return Ok(());
        }

        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        check_cap::<T>(new_cap)?;

        self.realloc_with_cap(new_cap);
        Ok(())
    }

    /// Moves every element into a newly allocated buffer of `new_cap` slots.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!("growing ArrayList from capacity {} to {}", self.cap(), new_cap);

        let mut slots = alloc_slots(new_cap);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }

    /// Checks that the provided index refers to an element of the list.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Yields a reference to every element in `[0, len)`.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> + Clone {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.values().position(|element| element == item)
    }

    /// Returns true if the ArrayList contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning it. If no such element exists, the
    /// list is left untouched and [`None`] is returned.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert_eq!(list.remove_item(&2), Some(2));
    /// assert_eq!(list.remove_item(&4), None);
    /// assert_eq!(list.to_string(), "[1, 3, 2]");
    /// ```
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        self.try_remove(index).ok()
    }
}

impl<T: Ord> ArrayList<T> {
    /// Sorts the elements of the ArrayList into ascending order. The sort isn't stable, so equal
    /// elements may be reordered.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = [5, 10, 3, 7].into_iter().collect();
    /// list.sort();
    /// assert_eq!(list.to_string(), "[3, 5, 7, 10]");
    /// ```
    pub fn sort(&mut self) {
        // Every slot below len is occupied, so ordering the Options orders the values.
        self.slots[..self.len].sort_unstable();
    }
}

/// Checks that a buffer of `cap` slots has a size that doesn't exceed [`isize::MAX`].
const fn check_cap<T>(cap: usize) -> Result<(), CapacityOverflow> {
    match cap.checked_mul(size_of::<Option<T>>()) {
        Some(size) if size <= MAX_CAP => Ok(()),
        _ => Err(CapacityOverflow),
    }
}

fn alloc_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_cap(iter.size_hint().0.max(1));
        list.extend(iter);
        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        ArrayList {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.values() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &DebugEntries(self.values()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.values().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
