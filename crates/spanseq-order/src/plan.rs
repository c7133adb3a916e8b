//! Deferred ordering requests over a caller-owned backing buffer.
//!
//! Building a plan does no work. The heap is built when the plan becomes a
//! cursor, and elements are ordered lazily as the cursor is pulled.

use std::cmp::Ordering;

use spanseq_core::combinators::{Filter, Select, Slice};
use spanseq_core::{Cursor, Error, IntoCursor, Result};

use crate::heap::heapify;
use crate::key::{
    ByKey, CompareFn, Descending, KeyComparer, KeyFn, Natural, ThenBy, ValueKey, ValueOrder,
};
use crate::producer::OrderingProducer;

/// How the backing buffer relates to the values being ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aliasing {
    /// The values are ordered where they already live.
    SameStorage,
    /// The values were copied from a separate source before ordering.
    Distinct,
}

/// A backing buffer loaded with the values to order.
#[derive(Debug)]
pub struct Staged<'a, T> {
    backing: &'a mut [T],
    aliasing: Aliasing,
}

impl<'a, T> Staged<'a, T> {
    /// Order `buffer` in place.
    pub fn in_place(buffer: &'a mut [T]) -> Self {
        Self {
            backing: buffer,
            aliasing: Aliasing::SameStorage,
        }
    }

    /// Copy `source` into the front of `backing` and order it there.
    ///
    /// Fails with `InvalidArgument` when `backing` is shorter than `source`.
    /// Any extra backing slots are left alone.
    pub fn copied(source: &[T], backing: &'a mut [T]) -> Result<Self>
    where
        T: Clone,
    {
        if backing.len() < source.len() {
            return Err(Error::invalid_argument(
                "backing",
                "backing buffer is shorter than the source",
            ));
        }
        let backing = &mut backing[..source.len()];
        backing.clone_from_slice(source);
        Ok(Self {
            backing,
            aliasing: Aliasing::Distinct,
        })
    }

    /// Drain a pipeline into the front of `backing` and order it there.
    ///
    /// Fails with `DestinationTooSmall` when the pipeline has more elements
    /// than `backing` holds. Only the filled prefix is ordered; slots past it
    /// hold unspecified values afterwards.
    pub fn from_cursor<S>(source: S, backing: &'a mut [T]) -> Result<Self>
    where
        S: IntoCursor<Item = T>,
        T: Default,
    {
        let mut cursor = source.into_cursor();
        let capacity = backing.len();
        let filled = cursor.fill(backing);
        if filled == capacity && cursor.pull(&mut [T::default()]) > 0 {
            return Err(Error::DestinationTooSmall { capacity });
        }
        Ok(Self {
            backing: &mut backing[..filled],
            aliasing: Aliasing::Distinct,
        })
    }

    pub fn aliasing(&self) -> Aliasing {
        self.aliasing
    }

    /// Order under an arbitrary `ValueOrder`.
    pub fn by<O: ValueOrder<T>>(self, order: O) -> OrderingPlan<'a, T, O> {
        OrderingPlan {
            backing: self.backing,
            aliasing: self.aliasing,
            order,
        }
    }

    /// Ascending by the values' own order.
    pub fn by_value(self) -> OrderingPlan<'a, T, ByKey<ValueKey, Natural>>
    where
        T: Ord + Clone,
    {
        self.by(ByKey::new(ValueKey, Natural))
    }

    pub fn by_value_descending(self) -> OrderingPlan<'a, T, ByKey<ValueKey, Descending<Natural>>>
    where
        T: Ord + Clone,
    {
        self.by(ByKey::new(ValueKey, Descending(Natural)))
    }

    /// Ascending by `compare`, e.g. `f64::total_cmp`.
    pub fn by_value_with<F>(self, compare: F) -> OrderingPlan<'a, T, ByKey<ValueKey, CompareFn<F>>>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        self.by(ByKey::new(ValueKey, CompareFn(compare)))
    }

    /// Ascending by the key `key` computes.
    pub fn by_key<K, F>(self, key: F) -> OrderingPlan<'a, T, ByKey<KeyFn<F>, Natural>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.by(ByKey::new(KeyFn(key), Natural))
    }

    pub fn by_key_descending<K, F>(
        self,
        key: F,
    ) -> OrderingPlan<'a, T, ByKey<KeyFn<F>, Descending<Natural>>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.by(ByKey::new(KeyFn(key), Descending(Natural)))
    }

    pub fn by_key_with<K, F, C>(self, key: F, comparer: C) -> OrderingPlan<'a, T, ByKey<KeyFn<F>, C>>
    where
        F: Fn(&T) -> K,
        C: KeyComparer<K>,
    {
        self.by(ByKey::new(KeyFn(key), comparer))
    }
}

/// Order `source` by `key` under `comparer`, staging it in `backing`.
///
/// Fails with `InvalidArgument` when `backing` is shorter than `source`. To
/// order a buffer where it lives, use [`Staged::in_place`].
pub fn order_by<'a, T, K, F, C>(
    source: &[T],
    backing: &'a mut [T],
    key: F,
    comparer: C,
) -> Result<OrderingPlan<'a, T, ByKey<KeyFn<F>, C>>>
where
    T: Clone,
    F: Fn(&T) -> K,
    C: KeyComparer<K>,
{
    Ok(Staged::copied(source, backing)?.by_key_with(key, comparer))
}

/// A deferred, single-use sort over a backing buffer.
///
/// Turning the plan into a cursor builds the heap; pulling the cursor
/// yields the values in order. After a full drain the backing buffer is
/// left sorted ascending under the plan's ordering.
#[derive(Debug)]
pub struct OrderingPlan<'a, T, O> {
    backing: &'a mut [T],
    aliasing: Aliasing,
    order: O,
}

impl<'a, T, O> OrderingPlan<'a, T, O> {
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    pub fn aliasing(&self) -> Aliasing {
        self.aliasing
    }

    /// Break ties with `comparer` applied to the key `key` computes.
    pub fn then_by_with<K, F, D>(self, key: F, comparer: D) -> OrderingPlan<'a, T, ThenBy<O, F, D>>
    where
        F: Fn(&T) -> K,
        D: KeyComparer<K>,
    {
        OrderingPlan {
            backing: self.backing,
            aliasing: self.aliasing,
            order: ThenBy::new(self.order, key, comparer),
        }
    }

    /// Break ties ascending by `key`.
    pub fn then_by<K, F>(self, key: F) -> OrderingPlan<'a, T, ThenBy<O, F, Natural>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.then_by_with(key, Natural)
    }

    /// Break ties descending by `key`.
    pub fn then_by_descending<K, F>(self, key: F) -> OrderingPlan<'a, T, ThenBy<O, F, Descending<Natural>>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.then_by_with(key, Descending(Natural))
    }
}

impl<'a, T, O> OrderingPlan<'a, T, O>
where
    T: Clone,
    O: ValueOrder<T>,
{
    pub fn select<U, F>(self, map: F) -> Cursor<&'a mut [T], Select<OrderingProducer<O>, F>>
    where
        F: FnMut(T) -> U,
    {
        self.into_cursor().select(map)
    }

    pub fn filter<F>(self, predicate: F) -> Cursor<&'a mut [T], Filter<OrderingProducer<O>, F>>
    where
        F: FnMut(&T) -> bool,
    {
        self.into_cursor().filter(predicate)
    }

    pub fn slice(self, offset: usize, count: usize) -> Cursor<&'a mut [T], Slice<OrderingProducer<O>>> {
        self.into_cursor().slice(offset, count)
    }
}

impl<'a, T, O> IntoCursor for OrderingPlan<'a, T, O>
where
    T: Clone,
    O: ValueOrder<T>,
{
    type Input = &'a mut [T];
    type Item = T;
    type Producer = OrderingProducer<O>;

    fn into_cursor(self) -> Cursor<&'a mut [T], OrderingProducer<O>> {
        let OrderingPlan {
            backing,
            aliasing,
            order,
        } = self;
        let len = backing.len();

        #[cfg(feature = "tracing")]
        tracing::trace!(len, ?aliasing, "ordering plan drained");
        #[cfg(not(feature = "tracing"))]
        let _ = aliasing;

        heapify(backing, &order);
        Cursor::from_parts(backing, OrderingProducer::new(order), Some(len))
    }
}
