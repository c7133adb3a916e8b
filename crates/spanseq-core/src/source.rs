//! Sequence sources: borrowed buffers and generators.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// Copies elements straight from the borrowed input buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<'a, T: Clone> Producer<&'a [T]> for Identity {
    type Item = T;

    #[inline]
    fn produce(&mut self, input: &mut &'a [T], output: &mut [T]) -> usize {
        let count = input.len().min(output.len());
        let (head, tail) = input.split_at(count);
        output[..count].clone_from_slice(head);
        *input = tail;
        count
    }
}

/// Consecutive `i32` values.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    next: i32,
    remaining: usize,
}

impl Producer<()> for Range {
    type Item = i32;

    #[inline]
    fn produce(&mut self, _input: &mut (), output: &mut [i32]) -> usize {
        let count = self.remaining.min(output.len());
        for slot in &mut output[..count] {
            *slot = self.next;
            // Cannot overflow: construction guarantees start + count <= i32::MAX.
            self.next += 1;
        }
        self.remaining -= count;
        count
    }
}

/// The same value, a fixed number of times.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Producer<()> for Repeat<T> {
    type Item = T;

    #[inline]
    fn produce(&mut self, _input: &mut (), output: &mut [T]) -> usize {
        let count = self.remaining.min(output.len());
        for slot in &mut output[..count] {
            slot.clone_from(&self.value);
        }
        self.remaining -= count;
        count
    }
}

/// Adapts an iterator as a generator.
#[derive(Debug, Clone)]
pub struct FromIter<It> {
    iter: It,
}

impl<It: Iterator> Producer<()> for FromIter<It> {
    type Item = It::Item;

    fn produce(&mut self, _input: &mut (), output: &mut [It::Item]) -> usize {
        let mut written = 0;
        for slot in output.iter_mut() {
            match self.iter.next() {
                Some(value) => {
                    *slot = value;
                    written += 1;
                }
                None => break,
            }
        }
        written
    }
}

/// A sequence over the elements of a borrowed buffer.
pub fn from_buffer<T: Clone>(buffer: &[T]) -> Cursor<&[T], Identity> {
    Cursor::from_parts(buffer, Identity, Some(buffer.len()))
}

/// `count` consecutive integers starting at `start`.
///
/// Fails with `InvalidArgument` when `count` is negative or the last value
/// would not fit in an `i32`.
pub fn range(start: i32, count: i32) -> Result<Cursor<(), Range>> {
    if count < 0 {
        return Err(Error::invalid_argument("count", "range count is negative"));
    }
    if start.checked_add(count).is_none() {
        return Err(Error::invalid_argument(
            "count",
            "range end overflows i32",
        ));
    }
    // count >= 0 was checked above.
    let remaining = count.unsigned_abs() as usize;
    Ok(Cursor::from_parts(
        (),
        Range {
            next: start,
            remaining,
        },
        Some(remaining),
    ))
}

/// `value`, `count` times.
pub fn repeat<T: Clone>(value: T, count: i32) -> Result<Cursor<(), Repeat<T>>> {
    if count < 0 {
        return Err(Error::invalid_argument("count", "repeat count is negative"));
    }
    let remaining = count.unsigned_abs() as usize;
    Ok(Cursor::from_parts(
        (),
        Repeat { value, remaining },
        Some(remaining),
    ))
}

/// Adapt any iterator. The length is known only when the iterator reports an
/// exact size hint.
pub fn from_iter<It: IntoIterator>(iter: It) -> Cursor<(), FromIter<std::iter::Fuse<It::IntoIter>>> {
    let iter = iter.into_iter().fuse();
    let known_len = match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    };
    Cursor::from_parts((), FromIter { iter }, known_len)
}
