//! Folds over a sequence.

use spanseq_core::{Cursor, Error, Producer, Result};

use crate::element::next;

/// Seeded fold.
pub fn aggregate<I, P, A, F>(mut cursor: Cursor<I, P>, seed: A, mut fold: F) -> A
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(A, P::Item) -> A,
{
    let mut acc = seed;
    while let Some(value) = next(&mut cursor) {
        acc = fold(acc, value);
    }
    acc
}

/// Seeded fold followed by a final projection of the accumulator.
pub fn aggregate_map<I, P, A, R, F, M>(cursor: Cursor<I, P>, seed: A, fold: F, map: M) -> R
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(A, P::Item) -> A,
    M: FnOnce(A) -> R,
{
    map(aggregate(cursor, seed, fold))
}

/// Fold seeded with the first element. Fails with `EmptySequence` when
/// there is no first element.
pub fn reduce<I, P, F>(mut cursor: Cursor<I, P>, fold: F) -> Result<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(P::Item, P::Item) -> P::Item,
{
    let seed = next(&mut cursor).ok_or(Error::EmptySequence)?;
    Ok(aggregate(cursor, seed, fold))
}

pub fn reduce_map<I, P, R, F, M>(cursor: Cursor<I, P>, fold: F, map: M) -> Result<R>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(P::Item, P::Item) -> P::Item,
    M: FnOnce(P::Item) -> R,
{
    reduce(cursor, fold).map(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanseq_core::{from_buffer, range};

    #[test]
    fn test_reduce_on_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(from_buffer(&empty), |a, b| a + b), Err(Error::EmptySequence));
        assert_eq!(aggregate(from_buffer(&empty), 7, |a, b| a + b), 7);
    }

    #[test]
    fn test_aggregate_map_projects() {
        let mean = aggregate_map(
            range(1, 4).unwrap(),
            (0, 0),
            |(sum, n), v| (sum + v, n + 1),
            |(sum, n)| sum as f64 / n as f64,
        );
        assert_eq!(mean, 2.5);
        assert_eq!(reduce_map(range(1, 4).unwrap(), i32::max, |m| m * 10), Ok(40));
    }
}
