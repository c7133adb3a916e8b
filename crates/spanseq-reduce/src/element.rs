//! First / last / single element reducers.
//!
//! All of these pull one element at a time into a stack slot, so only the
//! elements actually inspected are produced. `last` has no short-circuit.

use spanseq_core::{Cursor, Error, Producer, Result};

/// Pull the next element, or `None` once the cursor is drained.
#[inline]
pub(crate) fn next<I, P>(cursor: &mut Cursor<I, P>) -> Option<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    let mut slot = [P::Item::default()];
    if cursor.pull(&mut slot) == 0 {
        return None;
    }
    let [value] = slot;
    Some(value)
}

/// Next element satisfying `predicate`.
#[inline]
pub(crate) fn next_match<I, P, F>(cursor: &mut Cursor<I, P>, predicate: &mut F) -> Option<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    while let Some(value) = next(cursor) {
        if predicate(&value) {
            return Some(value);
        }
    }
    None
}

pub fn first<I, P>(mut cursor: Cursor<I, P>) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    next(&mut cursor).ok_or(Error::EmptySequence)
}

pub fn first_match<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    next_match(&mut cursor, &mut predicate).ok_or(Error::EmptySequence)
}

pub fn last<I, P>(mut cursor: Cursor<I, P>) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    let mut last = None;
    while let Some(value) = next(&mut cursor) {
        last = Some(value);
    }
    last.ok_or(Error::EmptySequence)
}

pub fn last_match<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    let mut last = None;
    while let Some(value) = next_match(&mut cursor, &mut predicate) {
        last = Some(value);
    }
    last.ok_or(Error::EmptySequence)
}

/// The only element matching `predicate`; `Ok(None)` when there is none.
///
/// Stops at the second match without draining the rest.
pub fn single_match_opt<I, P, F>(mut cursor: Cursor<I, P>, mut predicate: F) -> Result<Option<P::Item>>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    let Some(found) = next_match(&mut cursor, &mut predicate) else {
        return Ok(None);
    };
    if next_match(&mut cursor, &mut predicate).is_some() {
        return Err(Error::MultipleElements);
    }
    Ok(Some(found))
}

pub fn single<I, P>(cursor: Cursor<I, P>) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    single_match_opt(cursor, |_| true)?.ok_or(Error::EmptySequence)
}

pub fn single_match<I, P, F>(cursor: Cursor<I, P>, predicate: F) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(&P::Item) -> bool,
{
    single_match_opt(cursor, predicate)?.ok_or(Error::EmptySequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanseq_core::{from_buffer, range};

    #[test]
    fn test_first_short_circuits() {
        let mut seen = 0;
        let value = first_match(
            range(0, 1_000).unwrap().select(|n| {
                seen += 1;
                n
            }),
            |n| *n == 3,
        )
        .unwrap();
        assert_eq!(value, 3);
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_last_drains() {
        assert_eq!(last(range(5, 10).unwrap()), Ok(14));
        assert_eq!(last_match(range(0, 10).unwrap(), |n| n % 4 == 1), Ok(9));
        assert_eq!(last(from_buffer::<i32>(&[])), Err(Error::EmptySequence));
    }

    #[test]
    fn test_single_stops_at_second_match() {
        assert_eq!(single(range(0, 5).unwrap()), Err(Error::MultipleElements));
        assert_eq!(single_match(range(0, 5).unwrap(), |n| *n == 2), Ok(2));
        assert_eq!(single_match_opt(range(0, 5).unwrap(), |n| *n > 10), Ok(None));
    }
}
