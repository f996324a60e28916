pub use {
    crate::sequence::{Sequence, FixedSequence},
    crate::sequence::traits::{Allocation, Length, Operation, Composition},
    crate::sequence::growth::{Growth, Amortized, Fixed},
    crate::sequence::position::Position,
    crate::sequence::iter::Iter,
    crate::error::{Error, OutOfRange, Result, Window},
};
