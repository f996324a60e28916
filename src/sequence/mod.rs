use std::marker::PhantomData;
use std::ops::Range;

use crate::error::{Error, Result};

pub mod growth;
pub mod iter;
pub mod position;
pub mod traits;

use growth::{Amortized, Fixed, Growth};
use iter::Iter;
use position::Position;
use traits::{Allocation, Composition, Length, Operation};

#[derive(Clone)]
struct Container<T> {
    slots: Box<[Option<T>]>,
    length: usize,
}

impl<T> Container<T> {
    fn allocate(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity { slots.push(None); }

        Self {
            slots: slots.into_boxed_slice(),
            length: 0,
        }
    }

    fn assemble(values: impl IntoIterator<Item = T>) -> Self {
        let slots: Box<[Option<T>]> = values.into_iter().map(Some).collect();
        let length = slots.len();
        Self { slots, length }
    }
}

/// ### -> `Sequence<T, G>` - a resizable array with an explicit capacity/length split.
///
/// `Sequence<T>` owns a contiguous backing store of `capacity` slots of which the
/// first `length` hold elements. Elements are addressed by zero-based index.
///
/// ### -> `Operations`
///
/// - **In-place** (`Operation<T>`): `get`, `set`, `add`, `remove`. `add` and `remove`
///   shift the elements after `index` to keep the present elements contiguous.
/// - **Whole-array** (`Composition<T>`): `append`, `insert`, `sublist`, `delete`,
///   `extract`. These never modify the receiver or the operand; they clone the
///   selected elements into a new, independently owned sequence.
///
/// ### -> `Growth`
///
/// The `G` parameter decides what happens when `add` finds the sequence full:
///
/// - `Sequence<T>` (`G = Amortized`) resizes the backing store before shifting.
/// - `FixedSequence<T>` (`G = Fixed`) refuses with `Error::CapacityExceeded`.
///
/// Capacity never shrinks.
///
/// ### -> `Invariants`
///
/// 1. **Length ≤ Capacity**: the length never exceeds the capacity.
/// 2. **Present Within Length**: all slots within `[0..length)` hold an element.
/// 3. **Empty Beyond Length**: all slots at index ≥ length are empty.
///
/// Violations of these invariants panic, as they indicate data corruption
/// rather than user errors.
///
/// ### -> `Error Handling`
///
/// - **User Errors** (index out of range, capacity exceeded): returned as `Err`,
///   after validation and before any element is moved.
/// - **Invariant Violations**: panic with diagnostic information.
///
/// ### -> `Ownership`
///
/// Cloning a `Sequence<T>` is a deep copy: the clone has the same length,
/// capacity and element values, and shares no storage with the original.
/// Mutation requires `&mut self`; whole-array operations only need `&self`.
///
/// ### -> `Usage Example`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence = Sequence::<i32>::allocate(4);
///     assert_eq!(sequence.size(), 0);
///     assert_eq!(sequence.capacity(), 4);
///
///     for i in 0..5 {
///         sequence.add(i, sequence.size())?;
///     }
///     assert_eq!(sequence.size(), 5);
///     assert!(sequence.capacity() >= 5);
///
///     sequence.add(99, 1)?;
///     assert_eq!(sequence.snapshot(), vec![0, 99, 1, 2, 3, 4]);
///
///     let tail = sequence.sublist(3, sequence.size())?;
///     assert_eq!(tail.snapshot(), vec![2, 3, 4]);
///
///     let mut fixed = FixedSequence::<i32>::allocate(1);
///     fixed.add(1, 0)?;
///     assert!(fixed.add(2, 1).unwrap_err().is_capacity_exceeded());
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Sequence<T, G = Amortized> {
    container: Container<T>,
    growth: PhantomData<fn() -> G>,
}

/// A sequence whose capacity never changes after allocation.
pub type FixedSequence<T> = Sequence<T, Fixed>;

impl<T, G> Sequence<T, G> {
    fn from_container(container: Container<T>) -> Self {
        Self { container, growth: PhantomData }
    }

    fn slot(&self, index: usize) -> &T {
        match &self.container.slots[index] {
            Some(value) => value,
            None => panic!("Invariant violation: slot at index {} is empty within bounds (length {}).", index, self.container.length),
        }
    }

    fn view(&self, range: Range<usize>) -> Iter<'_, T> {
        Iter::new(&self.container.slots[range])
    }

    /// Replaces the backing store with one of `upto` slots, moving every
    /// present element. The caller guarantees `upto >= length`.
    fn resize(&mut self, upto: usize) {
        let length = self.container.length;
        assert!(upto >= length, "Cannot resize to {} slots below length {}.", upto, length);

        tracing::debug!(from = self.container.slots.len(), to = upto, length, "resizing sequence");

        let mut container = Container::allocate(upto);
        for i in 0..length {
            container.slots[i] = self.container.slots[i].take();
        }
        container.length = length;

        self.container = container;
    }

    /// Opens an empty slot at `from` by moving `from..length` one slot right.
    /// The caller guarantees `length < capacity`.
    fn shift(&mut self, from: usize) {
        let length = self.container.length;
        debug_assert!(length < self.container.slots.len());

        // Shift right from end to start to avoid overwriting
        for i in (from..length).rev() {
            self.container.slots[i + 1] = self.container.slots[i].take();
        }
    }

    fn copy_range(&self, operation: &'static str, from: impl Position, to: impl Position) -> Result<Self>
    where
        T: Clone,
    {
        let range = position::range(operation, from, to, self.container.length)?;
        Ok(Self::from_container(Container::assemble(self.view(range).cloned())))
    }

    /// Iterates over the present elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.view(0..self.container.length)
    }

    /// Clones the present elements into a `Vec<T>`.
    #[must_use = "Snapshot output must serve a purpose!"]
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, G> Allocation<T> for Sequence<T, G> {
    fn allocate(capacity: usize) -> Self {
        tracing::trace!(capacity, "allocating sequence");
        Self::from_container(Container::allocate(capacity))
    }

    fn allocate_from<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_container(Container::assemble(values))
    }
}

impl<T, G> Length for Sequence<T, G> {
    #[inline]
    fn size(&self) -> usize {
        self.container.length
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.container.slots.len()
    }
}

impl<T, G> Operation<T> for Sequence<T, G>
where
    G: Growth,
{
    fn get(&self, index: impl Position) -> Result<&T> {
        let index = position::occupied("get", index, self.container.length)?;
        Ok(self.slot(index))
    }

    fn set(&mut self, element: T, index: impl Position) -> Result<T> {
        let length = self.container.length;
        let index = position::occupied("set", index, length)?;

        match self.container.slots[index].replace(element) {
            Some(previous) => Ok(previous),
            None => panic!("Invariant violation: slot at index {} is empty within bounds (length {}).", index, length),
        }
    }

    fn add(&mut self, element: T, index: impl Position) -> Result<()> {
        let length = self.container.length;
        let index = position::insertion("add", index, length)?;

        let capacity = self.capacity();
        assert!(length <= capacity, "Invariant violation: length {} exceeds capacity {}.", length, capacity);

        if length == capacity {
            let required = length + 1;
            let upto = G::generate_capacity(capacity, required)
                .ok_or(Error::CapacityExceeded { operation: "add", capacity, required })?;
            assert!(upto >= required, "Growth strategy returned {} slots, {} required.", upto, required);
            self.resize(upto);
        }

        self.shift(index);

        let previous = self.container.slots[index].replace(element);
        assert!(previous.is_none(), "Invariant violation: slot at index {} should be empty after shift (length {}).", index, length);

        self.container.length += 1;
        Ok(())
    }

    fn remove(&mut self, index: impl Position) -> Result<T> {
        let length = self.container.length;
        let index = position::occupied("remove", index, length)?;

        let removed = match self.container.slots[index].take() {
            Some(removed) => removed,
            None => panic!("Invariant violation: slot at index {} is empty within bounds (length {}).", index, length),
        };

        // Shift left from start to end; each take clears the source slot,
        // so the last one leaves the trailing slot empty.
        for i in index + 1..length {
            self.container.slots[i - 1] = self.container.slots[i].take();
        }
        debug_assert!(self.container.slots[length - 1].is_none());

        self.container.length -= 1;
        Ok(removed)
    }
}

impl<T, G> Composition<T> for Sequence<T, G>
where
    T: Clone,
    G: Growth,
{
    fn append(&self, other: &Self) -> Self {
        Self::from_container(Container::assemble(self.iter().chain(other.iter()).cloned()))
    }

    fn insert(&self, other: &Self, index: impl Position) -> Result<Self> {
        let length = self.container.length;
        let index = position::insertion("insert", index, length)?;

        let values = self.view(0..index)
            .chain(other.iter())
            .chain(self.view(index..length))
            .cloned();

        Ok(Self::from_container(Container::assemble(values)))
    }

    fn sublist(&self, from: impl Position, to: impl Position) -> Result<Self> {
        self.copy_range("sublist", from, to)
    }

    fn delete(&self, from: impl Position, to: impl Position) -> Result<Self> {
        let length = self.container.length;
        let range = position::range("delete", from, to, length)?;

        let values = self.view(0..range.start)
            .chain(self.view(range.end..length))
            .cloned();

        Ok(Self::from_container(Container::assemble(values)))
    }

    fn extract(&self, from: impl Position, to: impl Position) -> Result<Self> {
        self.copy_range("extract", from, to)
    }
}

impl<T, G> Clone for Sequence<T, G>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, G> Default for Sequence<T, G> {
    fn default() -> Self {
        Self::allocate(0)
    }
}

impl<T, G, H> PartialEq<Sequence<T, H>> for Sequence<T, G>
where
    T: PartialEq,
{
    fn eq(&self, other: &Sequence<T, H>) -> bool {
        self.container.length == other.container.length && self.iter().eq(other.iter())
    }
}

impl<T, G> Eq for Sequence<T, G> where T: Eq {}

impl<T, G> std::fmt::Debug for Sequence<T, G>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, G> FromIterator<T> for Sequence<T, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::allocate_from(iter)
    }
}

impl<T, G> Extend<T> for Sequence<T, G>
where
    G: Growth,
{
    /// Adds each value at the end.
    ///
    /// ### -> `Panics`
    ///
    /// Panics if the strategy refuses to grow (a full `FixedSequence`).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let length = self.container.length;
            if let Err(error) = self.add(value, length) {
                panic!("Cannot extend sequence: {}", error);
            }
        }
    }
}

impl<'a, T, G> IntoIterator for &'a Sequence<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
