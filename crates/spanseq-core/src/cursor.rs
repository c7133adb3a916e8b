//! `Cursor`: a producer paired with its input view and remaining-length
//! bookkeeping. This is the handle client code chains and drives.

use std::iter::FusedIterator;

use crate::boxed::{Boxed, BoxedCursor};
use crate::combinators::{Filter, OfType, Select, Slice};
use crate::producer::Producer;

/// A pull-driven sequence.
///
/// Invariants:
/// - `remaining`, once known, is decremented by exactly the number of
///   elements each pull produced, and never underflows.
/// - The input view is borrowed for the traversal only; the cursor cannot
///   outlive the buffer it reads from.
#[derive(Debug, Clone)]
pub struct Cursor<I, P> {
    input: I,
    producer: P,
    remaining: Option<usize>,
}

impl<I, P: Producer<I>> Cursor<I, P> {
    /// Assemble a cursor. `known_len` must be exact when present.
    pub fn from_parts(input: I, producer: P, known_len: Option<usize>) -> Self {
        Self {
            input,
            producer,
            remaining: known_len,
        }
    }

    /// Remaining number of elements, if known without pulling.
    #[inline]
    pub fn known_len(&self) -> Option<usize> {
        self.remaining
    }

    /// Pull as many elements as fit into `output`, consuming them.
    ///
    /// Returns the number of elements written to the front of `output`.
    /// Zero means the sequence is exhausted (or `output` is empty). Slots
    /// past the returned count hold unspecified values.
    #[inline]
    pub fn pull(&mut self, output: &mut [P::Item]) -> usize {
        let produced = self.producer.produce(&mut self.input, output);
        if let Some(remaining) = self.remaining.as_mut() {
            debug_assert!(produced <= *remaining, "producer outran its known length");
            *remaining = remaining.saturating_sub(produced);
        }
        produced
    }

    /// Pull until `output` is full or the sequence is drained.
    ///
    /// Returns the filled prefix length; elements past `output.len()` stay
    /// in the sequence.
    pub fn fill(&mut self, output: &mut [P::Item]) -> usize {
        let mut filled = 0;
        while filled < output.len() {
            let pulled = self.pull(&mut output[filled..]);
            if pulled == 0 {
                break;
            }
            filled += pulled;
        }
        filled
    }

    /// Map every element through `map` (Select).
    pub fn select<U, F>(self, map: F) -> Cursor<I, Select<P, F>>
    where
        F: FnMut(P::Item) -> U,
    {
        Cursor {
            input: self.input,
            producer: Select::new(self.producer, map),
            remaining: self.remaining,
        }
    }

    /// Keep only the elements for which `predicate` holds (Where).
    pub fn filter<F>(self, predicate: F) -> Cursor<I, Filter<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Cursor {
            input: self.input,
            producer: Filter::new(self.producer, predicate),
            remaining: None,
        }
    }

    /// Skip `offset` elements, then yield at most `count`.
    pub fn slice(self, offset: usize, count: usize) -> Cursor<I, Slice<P>> {
        let remaining = self
            .remaining
            .map(|len| len.saturating_sub(offset).min(count));
        Cursor {
            input: self.input,
            producer: Slice::new(self.producer, offset, count),
            remaining,
        }
    }

    /// Skip `offset` elements and yield the rest.
    pub fn skip(self, offset: usize) -> Cursor<I, Slice<P>> {
        self.slice(offset, usize::MAX)
    }

    /// Keep the elements that convert into `U`, converted.
    pub fn of_type<U>(self) -> Cursor<I, OfType<P, U>>
    where
        U: TryFrom<P::Item>,
    {
        Cursor {
            input: self.input,
            producer: OfType::new(self.producer),
            remaining: None,
        }
    }

    /// Erase the producer chain behind a single indirection.
    ///
    /// Use this only where different chains must share one type; it costs an
    /// allocation and a virtual call per pull.
    pub fn boxed<'a>(self) -> BoxedCursor<'a, P::Item>
    where
        I: 'a,
        P: 'a,
    {
        let remaining = self.remaining;
        Cursor {
            input: (),
            producer: Boxed::new(self),
            remaining,
        }
    }

    /// Pull through the producer without touching the length bookkeeping.
    /// Used by the boxing adapter, whose outer cursor keeps the count.
    #[inline]
    pub(crate) fn pull_untracked(&mut self, output: &mut [P::Item]) -> usize {
        self.producer.produce(&mut self.input, output)
    }
}

/// Anything that can be turned into a cursor: cursors themselves and
/// deferred plans such as an ordering plan.
pub trait IntoCursor: Sized {
    type Input;
    type Item;
    type Producer: Producer<Self::Input, Item = Self::Item>;

    fn into_cursor(self) -> Cursor<Self::Input, Self::Producer>;
}

impl<I, P: Producer<I>> IntoCursor for Cursor<I, P> {
    type Input = I;
    type Item = P::Item;
    type Producer = P;

    #[inline]
    fn into_cursor(self) -> Self {
        self
    }
}

/// Element-at-a-time iteration, for `for` loops and std adapters.
pub struct CursorIter<I, P> {
    cursor: Cursor<I, P>,
}

impl<I, P> Iterator for CursorIter<I, P>
where
    P: Producer<I>,
    P::Item: Default,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut slot = [P::Item::default()];
        if self.cursor.pull(&mut slot) == 0 {
            return None;
        }
        let [value] = slot;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor.known_len() {
            Some(len) => (len, Some(len)),
            None => (0, None),
        }
    }
}

impl<I, P> FusedIterator for CursorIter<I, P>
where
    P: Producer<I>,
    P::Item: Default,
{
}

impl<I, P> IntoIterator for Cursor<I, P>
where
    P: Producer<I>,
    P::Item: Default,
{
    type Item = P::Item;
    type IntoIter = CursorIter<I, P>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}
