//! Error types for sequence operations.

use thiserror::Error;

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The window of positions an operation accepts for a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Existing elements only, `0..length`.
    Occupied,
    /// Existing elements plus the end of the sequence, `0..=length`.
    Insertion,
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::Occupied => f.write_str("existing indexes (0..length)"),
            Window::Insertion => f.write_str("insertion points (0..=length)"),
        }
    }
}

/// Details of a rejected index or range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// A single index fell outside the operation's window.
    #[error("Index {index} out of bounds for sequence of length {length}. '{operation}' method can only operate on {window}.")]
    Index {
        /// Name of the rejected operation
        operation: &'static str,
        /// The index as given by the caller
        index: i128,
        /// Length of the sequence at the time of the call
        length: usize,
        /// Accepted window
        window: Window,
    },

    /// A `from..to` range was negative, reversed or past the end.
    #[error("Range {from}..{to} out of bounds for sequence of length {length}. '{operation}' method requires 0 <= from <= to <= length.")]
    Range {
        /// Name of the rejected operation
        operation: &'static str,
        /// Start of the range as given by the caller
        from: i128,
        /// End of the range as given by the caller
        to: i128,
        /// Length of the sequence at the time of the call
        length: usize,
    },
}

/// Errors returned by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index or range argument fell outside the valid window.
    #[error(transparent)]
    IndexOutOfRange(#[from] OutOfRange),

    /// A fixed-capacity sequence has no room left.
    #[error("Capacity exceeded: '{operation}' needs room for {required} elements but the sequence is fixed at {capacity}.")]
    CapacityExceeded {
        /// Name of the rejected operation
        operation: &'static str,
        /// Capacity of the sequence
        capacity: usize,
        /// Number of slots the operation needed
        required: usize,
    },
}

impl Error {
    /// Returns `true` for every bounds violation, single index or range.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange(_))
    }

    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }
}
