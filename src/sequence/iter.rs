use std::iter::FusedIterator;

/// Borrowing iterator over the present elements of a sequence, in order.
///
/// Created by `Sequence::iter`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// `slots` must only cover present slots.
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self { slots: slots.iter() }
    }
}

fn present<T>(slot: &Option<T>) -> &T {
    match slot {
        Some(value) => value,
        None => panic!("Invariant violation: empty slot found within bounds."),
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(present)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(present)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
