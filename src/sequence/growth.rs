/// ### -> `Growth` - capacity strategy of a sequence.
///
/// Consulted by `add` when the sequence is full (`length == capacity`).
/// Returning `None` refuses to grow and the operation fails with
/// `CapacityExceeded`; returning `Some(upto)` resizes the backing store to
/// `upto` slots before elements are shifted.
///
/// Implementations must return either `None` or a value `>= required`.
///
/// ### -> `Usage`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
///
/// struct Exact;
///
/// impl Growth for Exact {
///     fn generate_capacity(_current: usize, required: usize) -> Option<usize> {
///         Some(required)
///     }
/// }
///
/// let mut sequence = Sequence::<i32, Exact>::allocate(0);
/// for i in 0..3 {
///     sequence.add(i, sequence.size()).unwrap();
///     assert_eq!(sequence.capacity(), sequence.size());
/// }
/// ```
pub trait Growth {
    fn generate_capacity(current: usize, required: usize) -> Option<usize>;
}

/// Amortized growth: doubling while small, then 1.5x, then fixed steps of 1024.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amortized;

impl Growth for Amortized {
    fn generate_capacity(current: usize, required: usize) -> Option<usize> {
        let new_capacity = if current < 8 {
            (current * 2).max(8)
        } else if current < 4096 {
            current + (current / 2)
        } else {
            current + 1024
        };

        Some(new_capacity.max(required))
    }
}

/// Never grows. Adding to a full sequence fails with `CapacityExceeded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fixed;

impl Growth for Fixed {
    fn generate_capacity(_current: usize, _required: usize) -> Option<usize> {
        None
    }
}
