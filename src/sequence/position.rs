use std::ops::Range;

use crate::error::{OutOfRange, Result, Window};

/// An integer that can name a position in a sequence.
///
/// Implemented for every primitive integer so that signed positions
/// (including negative ones) reach the bounds checks and are rejected
/// with `IndexOutOfRange` rather than failing to compile.
///
/// ### -> `Usage`
///
/// ```
/// use dynamic_sequence::sequence::prelude::*;
///
/// let sequence: Sequence<char> = "abc".chars().collect();
/// assert_eq!(*sequence.get(2usize).unwrap(), 'c');
/// assert_eq!(*sequence.get(2).unwrap(), 'c');
/// assert!(sequence.get(-1).unwrap_err().is_index_out_of_range());
/// ```
pub trait Position: Copy {
    fn position(self) -> i128;
}

macro_rules! position {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Position for $integer {
                #[inline(always)]
                fn position(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

position!(usize, isize, u8, u16, u32, u64, i8, i16, i32, i64);

/// Resolves an index into `0..length`.
pub(crate) fn occupied(operation: &'static str, index: impl Position, length: usize) -> Result<usize> {
    resolve(operation, index, length, Window::Occupied)
}

/// Resolves an index into `0..=length`.
pub(crate) fn insertion(operation: &'static str, index: impl Position, length: usize) -> Result<usize> {
    resolve(operation, index, length, Window::Insertion)
}

fn resolve(operation: &'static str, index: impl Position, length: usize, window: Window) -> Result<usize> {
    let index = index.position();
    let limit = match window {
        Window::Occupied => length as i128,
        Window::Insertion => length as i128 + 1,
    };

    if index < 0 || index >= limit {
        return Err(OutOfRange::Index { operation, index, length, window }.into());
    }

    Ok(index as usize)
}

/// Resolves `from..to` with `0 <= from <= to <= length`.
pub(crate) fn range(operation: &'static str, from: impl Position, to: impl Position, length: usize) -> Result<Range<usize>> {
    let (from, to) = (from.position(), to.position());

    if from < 0 || to > length as i128 || from > to {
        return Err(OutOfRange::Range { operation, from, to, length }.into());
    }

    Ok(from as usize..to as usize)
}
