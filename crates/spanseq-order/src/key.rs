//! Key extraction and key comparison for orderings.
//!
//! An ordering is "extract a key, then compare keys", packaged as a
//! `ValueOrder` the heap sifts by. Multi-key orderings (`then_by`) chain a
//! further key lexicographically; the heap never knows the difference.

use std::cmp::Ordering;

/// Extracts the comparable key of a value.
pub trait KeyExtractor<T> {
    type Key;

    fn extract(&self, value: &T) -> Self::Key;

    /// Compare two values by their keys.
    ///
    /// Extractors whose key is the value itself override this to compare in
    /// place instead of materializing keys.
    #[inline]
    fn compare_by<C: KeyComparer<Self::Key>>(&self, comparer: &C, a: &T, b: &T) -> Ordering {
        comparer.compare(&self.extract(a), &self.extract(b))
    }
}

/// The value itself is the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueKey;

impl<T: Clone> KeyExtractor<T> for ValueKey {
    type Key = T;

    #[inline]
    fn extract(&self, value: &T) -> T {
        value.clone()
    }

    #[inline]
    fn compare_by<C: KeyComparer<Self::Key>>(&self, comparer: &C, a: &T, b: &T) -> Ordering {
        comparer.compare(a, b)
    }
}

/// Key computed by a function of the value.
#[derive(Debug, Clone, Copy)]
pub struct KeyFn<F>(pub F);

impl<T, K, F: Fn(&T) -> K> KeyExtractor<T> for KeyFn<F> {
    type Key = K;

    #[inline]
    fn extract(&self, value: &T) -> K {
        (self.0)(value)
    }
}

/// Total order over keys.
pub trait KeyComparer<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The key's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<K: Ord> KeyComparer<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses another comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending<C>(pub C);

impl<K, C: KeyComparer<K>> KeyComparer<K> for Descending<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Comparer backed by a closure, e.g. `CompareFn(f64::total_cmp)`.
#[derive(Debug, Clone, Copy)]
pub struct CompareFn<F>(pub F);

impl<K, F: Fn(&K, &K) -> Ordering> KeyComparer<K> for CompareFn<F> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

/// Total order over values; what the heap sifts by.
pub trait ValueOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order by the key `extractor` computes, under `comparer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<E, C> {
    extractor: E,
    comparer: C,
}

impl<E, C> ByKey<E, C> {
    pub const fn new(extractor: E, comparer: C) -> Self {
        Self {
            extractor,
            comparer,
        }
    }
}

impl<T, E, C> ValueOrder<T> for ByKey<E, C>
where
    E: KeyExtractor<T>,
    C: KeyComparer<E::Key>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.extractor.compare_by(&self.comparer, a, b)
    }
}

/// `outer`, then ties broken by the key `inner` computes under `comparer`.
///
/// Equivalent to comparing `(outer_key, inner_key)` tuples lexicographically,
/// except that the inner key is only computed for ties.
#[derive(Debug, Clone, Copy)]
pub struct ThenBy<O, F, D> {
    outer: O,
    inner: F,
    comparer: D,
}

impl<O, F, D> ThenBy<O, F, D> {
    pub fn new(outer: O, inner: F, comparer: D) -> Self {
        Self {
            outer,
            inner,
            comparer,
        }
    }
}

impl<T, K, O, F, D> ValueOrder<T> for ThenBy<O, F, D>
where
    O: ValueOrder<T>,
    F: Fn(&T) -> K,
    D: KeyComparer<K>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.outer.compare(a, b) {
            Ordering::Equal => self.comparer.compare(&(self.inner)(a), &(self.inner)(b)),
            other => other,
        }
    }
}
