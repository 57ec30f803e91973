use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range that an operation accepts for a collection of `len`
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection when the index was rejected.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Growing the collection would require a capacity that can't be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A collection was requested with a capacity that can't hold any elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid capacity {cap}, a collection must be able to hold at least one element!")]
pub struct InvalidCapacity {
    /// The capacity that was requested.
    pub cap: usize,
}

/// The error returned by insertions, which can fail on the index or on growing the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}

/// The error returned when creating a collection with an explicit capacity, which must be neither
/// 0 nor too large to allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InvalidOrCapOverflow {
    /// See [`InvalidCapacity`].
    InvalidCapacity(InvalidCapacity),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
