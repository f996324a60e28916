use crate::error::Result;
use crate::sequence::position::Position;

/// ### -> `Allocation<T> Trait`.
///
/// Provides construction for sequences and is the foundational trait of the
/// contract. Every other trait requires it.
///
/// ### -> `Methods`
/// - `allocate(capacity: usize) -> Self`:
/// Allocates an empty sequence (`size() == 0`) with exactly `capacity` slots.
/// - `allocate_from(values) -> Self`:
/// Allocates a sequence holding `values` in order, with capacity equal to their count.
///
/// ### -> `Usage`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
///
/// let sequence = Sequence::<i32>::allocate(5);
/// assert_eq!(sequence.size(), 0);
/// assert_eq!(sequence.capacity(), 5);
///
/// let sequence = Sequence::<char>::allocate_from("abc".chars());
/// assert_eq!(sequence.size(), 3);
/// assert_eq!(sequence.capacity(), 3);
/// ```
pub trait Allocation<T>
where
    Self: Sized,
{
    #[must_use = "Allocated sequences must have a purpose!"]
    fn allocate(capacity: usize) -> Self;

    #[must_use = "Allocated sequences must have a purpose!"]
    fn allocate_from<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>;
}

/// ### -> `Length Trait`.
///
/// Reports how many elements are present and how many fit.
///
/// `size()` is the number of logically present elements and never the
/// backing capacity.
pub trait Length {
    fn size(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.size() == other.size()
    }

    fn length_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.size().cmp(&other.size())
    }
}

/// ### -> `Operation<T> Trait`.
///
/// Element-level access and in-place mutation.
///
/// ### -> `Methods`
/// - `get(index) -> Result<&T>`:
///     - Returns the element at `index`.
///     - `index` must be in `0..size()`; otherwise `IndexOutOfRange`.
///
/// - `set(element, index) -> Result<T>`:
///     - Overwrites the element at `index` and returns the previous one.
///     - `index` must be in `0..size()`; otherwise `IndexOutOfRange`.
///     - The size is unchanged.
///
/// - `add(element, index) -> Result<()>`:
///     - Inserts `element` at `index`, shifting `index..size()` one slot right.
///     - `index` may equal `size()` (appending at the end).
///     - A full sequence grows according to its `Growth` strategy or fails with `CapacityExceeded`.
///
/// - `remove(index) -> Result<T>`:
///     - Removes and returns the element at `index`, shifting `index + 1..size()` one slot left.
///     - `index` must be in `0..size()`; otherwise `IndexOutOfRange`.
///     - The capacity is unchanged.
///
/// Every method validates its arguments before touching any element, so a
/// failed call leaves the sequence exactly as it was.
///
/// ### -> `Usage`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence = Sequence::<char>::allocate(4);
///     sequence.add('s', 0)?;
///     sequence.add('x', 0)?;
///     assert_eq!(sequence.snapshot(), vec!['x', 's']);
///
///     let previous = sequence.set('y', 0)?;
///     assert_eq!(previous, 'x');
///     assert_eq!(*sequence.get(0)?, 'y');
///
///     let removed = sequence.remove(1)?;
///     assert_eq!(removed, 's');
///     assert_eq!(sequence.size(), 1);
///
///     assert!(sequence.get(1).unwrap_err().is_index_out_of_range());
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Operation<T>: Allocation<T> + Length {
    #[must_use = "Fetched elements must have a purpose!"]
    fn get(&self, index: impl Position) -> Result<&T>;

    fn set(&mut self, element: T, index: impl Position) -> Result<T>;

    fn add(&mut self, element: T, index: impl Position) -> Result<()>;

    fn remove(&mut self, index: impl Position) -> Result<T>;
}

/// ### -> `Composition<T> Trait`.
///
/// Whole-array operations. None of them mutate the receiver or the operand:
/// each clones the selected elements into a freshly allocated sequence whose
/// capacity equals its size.
///
/// ### -> `Methods`
/// - `append(other) -> Self`: every element of `self`, then every element of `other`.
/// - `insert(other, index) -> Result<Self>`: `other` spliced into `self` at `index` (`0..=size()`).
/// - `sublist(from, to) -> Result<Self>`: the elements at `from..to`.
/// - `delete(from, to) -> Result<Self>`: `self` without the elements at `from..to`.
/// - `extract(from, to) -> Result<Self>`: same as `sublist`, reported under its own name.
///
/// Range operations require `0 <= from <= to <= size()`; `from == to` selects nothing.
///
/// ### -> `Usage`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let a1: Sequence<char> = "abcdef".chars().collect();
///     let a2: Sequence<char> = "wxyz".chars().collect();
///
///     let appended = a1.append(&a2);
///     assert_eq!(appended.iter().collect::<String>(), "abcdefwxyz");
///
///     let inserted = a1.insert(&a2, 2)?;
///     assert_eq!(inserted.iter().collect::<String>(), "abwxyzcdef");
///
///     let deleted = a1.delete(1, 4)?;
///     assert_eq!(deleted.iter().collect::<String>(), "aef");
///
///     let extracted = a1.extract(0, 5)?;
///     assert_eq!(extracted.size(), 5);
///
///     assert!(a1.extract(5, 1).unwrap_err().is_index_out_of_range());
///
///     // receivers are untouched
///     assert_eq!(a1.iter().collect::<String>(), "abcdef");
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Composition<T>: Operation<T>
where
    T: Clone,
{
    #[must_use = "Appending does not modify either sequence and must serve a purpose!"]
    fn append(&self, other: &Self) -> Self;

    #[must_use = "Inserting does not modify either sequence and must serve a purpose!"]
    fn insert(&self, other: &Self, index: impl Position) -> Result<Self>;

    #[must_use = "Sublists are copies and must serve a purpose!"]
    fn sublist(&self, from: impl Position, to: impl Position) -> Result<Self>;

    #[must_use = "Deleting does not modify the sequence and must serve a purpose!"]
    fn delete(&self, from: impl Position, to: impl Position) -> Result<Self>;

    #[must_use = "Extraction copies elements without removing them! Must serve a purpose!"]
    fn extract(&self, from: impl Position, to: impl Position) -> Result<Self>;
}
