//! Vectorized summation.
//!
//! The pull stream is chunked into one vector's worth of lanes. Lanes past
//! what a pull produced are zeroed before the chunk is loaded (producers may
//! leave scratch values there); chunks are accumulated lane-wise and reduced
//! horizontally once at the end.

use spanseq_core::{Cursor, Producer};
use wide::{f32x8, f64x4, i32x8, i64x4};

/// Element types that can be summed lane-wise.
///
/// Integer sums wrap on overflow, both in the lanes and in the final
/// horizontal reduction.
pub trait Summable: Copy + Default {
    /// One vector's worth of scalars.
    type Chunk: Default + AsMut<[Self]>;
    type Vector: Copy;

    fn zero() -> Self::Vector;
    fn load(chunk: &Self::Chunk) -> Self::Vector;
    fn add(acc: Self::Vector, chunk: Self::Vector) -> Self::Vector;
    fn horizontal(acc: Self::Vector) -> Self;
}

impl Summable for i32 {
    type Chunk = [i32; 8];
    type Vector = i32x8;

    #[inline]
    fn zero() -> i32x8 {
        i32x8::splat(0)
    }

    #[inline]
    fn load(chunk: &[i32; 8]) -> i32x8 {
        i32x8::new(*chunk)
    }

    #[inline]
    fn add(acc: i32x8, chunk: i32x8) -> i32x8 {
        acc + chunk
    }

    #[inline]
    fn horizontal(acc: i32x8) -> i32 {
        acc.to_array().iter().fold(0, |sum, lane| sum.wrapping_add(*lane))
    }
}

impl Summable for i64 {
    type Chunk = [i64; 4];
    type Vector = i64x4;

    #[inline]
    fn zero() -> i64x4 {
        i64x4::splat(0)
    }

    #[inline]
    fn load(chunk: &[i64; 4]) -> i64x4 {
        i64x4::new(*chunk)
    }

    #[inline]
    fn add(acc: i64x4, chunk: i64x4) -> i64x4 {
        acc + chunk
    }

    #[inline]
    fn horizontal(acc: i64x4) -> i64 {
        acc.to_array().iter().fold(0, |sum, lane| sum.wrapping_add(*lane))
    }
}

impl Summable for f32 {
    type Chunk = [f32; 8];
    type Vector = f32x8;

    #[inline]
    fn zero() -> f32x8 {
        f32x8::splat(0.0)
    }

    #[inline]
    fn load(chunk: &[f32; 8]) -> f32x8 {
        f32x8::new(*chunk)
    }

    #[inline]
    fn add(acc: f32x8, chunk: f32x8) -> f32x8 {
        acc + chunk
    }

    #[inline]
    fn horizontal(acc: f32x8) -> f32 {
        acc.reduce_add()
    }
}

impl Summable for f64 {
    type Chunk = [f64; 4];
    type Vector = f64x4;

    #[inline]
    fn zero() -> f64x4 {
        f64x4::splat(0.0)
    }

    #[inline]
    fn load(chunk: &[f64; 4]) -> f64x4 {
        f64x4::new(*chunk)
    }

    #[inline]
    fn add(acc: f64x4, chunk: f64x4) -> f64x4 {
        acc + chunk
    }

    #[inline]
    fn horizontal(acc: f64x4) -> f64 {
        acc.reduce_add()
    }
}

pub fn sum<I, P>(mut cursor: Cursor<I, P>) -> P::Item
where
    P: Producer<I>,
    P::Item: Summable,
{
    let mut acc = <P::Item as Summable>::zero();
    let mut chunk = <P::Item as Summable>::Chunk::default();
    loop {
        let pulled = cursor.pull(chunk.as_mut());
        if pulled == 0 {
            break;
        }
        chunk.as_mut()[pulled..].fill(P::Item::default());
        acc = <P::Item as Summable>::add(acc, <P::Item as Summable>::load(&chunk));
    }
    <P::Item as Summable>::horizontal(acc)
}

/// Sum of `map` applied to every element.
pub fn sum_by<I, P, S, F>(cursor: Cursor<I, P>, map: F) -> S
where
    P: Producer<I>,
    P::Item: Default,
    S: Summable,
    F: FnMut(P::Item) -> S,
{
    sum(cursor.select(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanseq_core::{from_buffer, range, repeat};

    #[test]
    fn test_partial_chunk_is_zero_padded() {
        // 11 elements: one full i32 chunk plus a 3-lane tail.
        assert_eq!(sum(range(1, 11).unwrap()), 66);
        assert_eq!(sum(range(0, 0).unwrap()), 0);
    }

    #[test]
    fn test_sum_ignores_filter_scratch() {
        assert_eq!(sum(range(1, 10).unwrap().filter(|n| n % 2 == 0)), 30);
        let data = [1i64, -2, 3, -4, 5, -6, 7, -8, 9, -10, 11];
        assert_eq!(sum(from_buffer(&data).filter(|n| *n < 0)), -30);
    }

    #[test]
    fn test_sum_ignores_slice_scratch() {
        assert_eq!(sum(range(1, 20).unwrap().slice(5, 2)), 13);
        assert_eq!(sum(range(1, 20).unwrap().skip(17)), 57);
    }

    #[test]
    fn test_integer_sum_wraps() {
        assert_eq!(sum(repeat(i32::MAX, 2).unwrap()), i32::MAX.wrapping_mul(2));
        assert_eq!(sum(repeat(i64::MAX, 5).unwrap()), i64::MAX.wrapping_mul(5));
    }

    #[test]
    fn test_float_sums() {
        let values = [0.5f64, 1.5, 2.0, 4.0, 8.0];
        assert_eq!(sum(from_buffer(&values)), 16.0);
        assert_eq!(sum_by(range(0, 9).unwrap(), |n| n as f32 * 0.5), 18.0);
    }

    #[test]
    fn test_sum_by_widens() {
        let total = sum_by(repeat(i32::MAX, 3).unwrap(), i64::from);
        assert_eq!(total, 3 * i32::MAX as i64);
    }
}
