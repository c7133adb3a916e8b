//! Counting and quantifier reducers.

use spanseq_core::{Cursor, Producer};

use crate::element::{next, next_match};

/// Number of elements. Sequences with a known length answer without pulling.
pub fn count<I, P>(mut cursor: Cursor<I, P>) -> usize
where
    P: Producer<I>,
    P::Item: Default,
{
    if let Some(len) = cursor.known_len() {
        return len;
    }
    let mut total = 0;
    while next(&mut cursor).is_some() {
        total += 1;
    }
    total
}

pub fn count_match<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> usize
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    let mut total = 0;
    while next_match(&mut cursor, &mut predicate).is_some() {
        total += 1;
    }
    total
}

/// Number of `true` elements in a sequence of flags.
pub fn count_true<I, P>(cursor: Cursor<I, P>) -> usize
where
    P: Producer<I>,
    P::Item: Into<bool> + Copy + Default,
{
    count_match(cursor, |flag| (*flag).into())
}

pub fn any<I, P>(mut cursor: Cursor<I, P>) -> bool
where
    P: Producer<I>,
    P::Item: Default,
{
    match cursor.known_len() {
        Some(len) => len > 0,
        None => next(&mut cursor).is_some(),
    }
}

pub fn any_match<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> bool
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    next_match(&mut cursor, &mut predicate).is_some()
}

/// `true` when no element fails `predicate` (vacuously true when empty).
pub fn all<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> bool
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    next_match(&mut cursor, &mut |value: &P::Item| !predicate(value)).is_none()
}
