use crate::sequence::prelude::*;

mod allocation;

/// Routes `tracing` events to the test writer, filtered by `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .ok();
}

/// Puts the characters of a string into a sequence, one `add` at a time.
fn characters(s: &str) -> Sequence<char> {
    let mut sequence: Sequence<char> = Sequence::allocate(s.chars().count());
    for (i, c) in s.chars().enumerate() {
        sequence.add(c, i).expect("adding at the end is always in range");
    }
    sequence
}

fn text<G>(sequence: &Sequence<char, G>) -> String {
    sequence.iter().collect()
}

/// Checks size and every element against `expected`.
fn compare<G: Growth>(sequence: &Sequence<char, G>, expected: &str) {
    assert_eq!(sequence.size(), expected.chars().count(), "[{}] lengths are equal", expected);
    for (i, c) in expected.chars().enumerate() {
        assert_eq!(*sequence.get(i).unwrap(), c, "[{}] elements are equal at index {}", expected, i);
    }
}
