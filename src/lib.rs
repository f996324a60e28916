//! A resizable array abstract data type.
//!
//! [`Sequence`](sequence::Sequence) stores elements of one type in a
//! contiguous backing store with an explicit capacity/length split. Elements
//! are mutated in place through [`Operation`](sequence::traits::Operation)
//! (`get`, `set`, `add`, `remove`) and combined into new sequences through
//! [`Composition`](sequence::traits::Composition) (`append`, `insert`,
//! `sublist`, `delete`, `extract`).
//!
//! ```
//! use dynamic_sequence::sequence::prelude::*;
//!
//! let mut s: Sequence<char> = "s".chars().collect();
//! s.add('1', 0).unwrap();
//! s.add('2', 0).unwrap();
//! s.add('3', 2).unwrap();
//! assert_eq!(s.iter().collect::<String>(), "213s");
//! ```

pub mod error;
pub mod sequence;

pub use error::{Error, OutOfRange, Result, Window};
pub use sequence::{FixedSequence, Sequence};
