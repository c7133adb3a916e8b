#![forbid(unsafe_code)]
//! spanseq-reduce: terminal reducers.
//!
//! Design intent:
//! - A reducer consumes its sequence: it takes the cursor (or an ordering
//!   plan) by value and drives it with exactly as many pulls as the answer
//!   needs.
//! - Failures are values (`spanseq_core::Error`), never panics.
//! - The only allocating reducers are `to_vec`/`to_vec_with`/`to_array`.

pub mod aggregate;
pub mod collect;
pub mod count;
pub mod element;
pub mod into;
pub mod sum;

pub use into::reverse_slice_into;
pub use sum::Summable;

use spanseq_core::{CollectConfig, IntoCursor, Result};

/// Terminal operations for anything that turns into a cursor.
///
/// Scalar reducers need `Item: Default` for the stack slot they pull
/// into; it is never observable in the results.
pub trait Reduce: IntoCursor {
    fn first(self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::first(self.into_cursor())
    }

    fn first_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::first(self.into_cursor()).unwrap_or_default()
    }

    fn first_match<F>(self, predicate: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        element::first_match(self.into_cursor(), predicate)
    }

    fn first_match_or_default<F>(self, predicate: F) -> Self::Item
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        element::first_match(self.into_cursor(), predicate).unwrap_or_default()
    }

    fn last(self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::last(self.into_cursor())
    }

    fn last_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::last(self.into_cursor()).unwrap_or_default()
    }

    fn last_match<F>(self, predicate: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        element::last_match(self.into_cursor(), predicate)
    }

    fn last_match_or_default<F>(self, predicate: F) -> Self::Item
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        element::last_match(self.into_cursor(), predicate).unwrap_or_default()
    }

    /// The only element. `EmptySequence` when there is none,
    /// `MultipleElements` as soon as a second one is seen.
    fn single(self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::single(self.into_cursor())
    }

    /// Like `single`, but an empty sequence yields the default value.
    /// A second element is still an error.
    fn single_or_default(self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        Ok(element::single_match_opt(self.into_cursor(), |_| true)?.unwrap_or_default())
    }

    fn single_match<F>(self, predicate: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        element::single_match(self.into_cursor(), predicate)
    }

    fn single_match_or_default<F>(self, predicate: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        Ok(element::single_match_opt(self.into_cursor(), predicate)?.unwrap_or_default())
    }

    fn count(self) -> usize
    where
        Self::Item: Default,
    {
        count::count(self.into_cursor())
    }

    fn count_match<F>(self, predicate: F) -> usize
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        count::count_match(self.into_cursor(), predicate)
    }

    /// Number of elements that are `true`.
    fn count_true(self) -> usize
    where
        Self::Item: Into<bool> + Copy + Default,
    {
        count::count_true(self.into_cursor())
    }

    fn any(self) -> bool
    where
        Self::Item: Default,
    {
        count::any(self.into_cursor())
    }

    fn any_match<F>(self, predicate: F) -> bool
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        count::any_match(self.into_cursor(), predicate)
    }

    fn all<F>(self, predicate: F) -> bool
    where
        Self::Item: Default,
        F: FnMut(&Self::Item) -> bool,
    {
        count::all(self.into_cursor(), predicate)
    }

    fn aggregate<A, F>(self, seed: A, fold: F) -> A
    where
        Self::Item: Default,
        F: FnMut(A, Self::Item) -> A,
    {
        aggregate::aggregate(self.into_cursor(), seed, fold)
    }

    fn aggregate_map<A, R, F, M>(self, seed: A, fold: F, map: M) -> R
    where
        Self::Item: Default,
        F: FnMut(A, Self::Item) -> A,
        M: FnOnce(A) -> R,
    {
        aggregate::aggregate_map(self.into_cursor(), seed, fold, map)
    }

    /// Fold seeded with the first element; `EmptySequence` when empty.
    fn reduce<F>(self, fold: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        aggregate::reduce(self.into_cursor(), fold)
    }

    fn reduce_map<R, F, M>(self, fold: F, map: M) -> Result<R>
    where
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
        M: FnOnce(Self::Item) -> R,
    {
        aggregate::reduce_map(self.into_cursor(), fold, map)
    }

    /// Fill as much of `dest` as possible and return the filled prefix.
    fn take_into(self, dest: &mut [Self::Item]) -> &mut [Self::Item] {
        into::take_into(&mut self.into_cursor(), dest)
    }

    /// Copy the whole sequence into `dest` and return the filled prefix.
    /// Slots past the prefix hold unspecified values.
    fn copy_into(self, dest: &mut [Self::Item]) -> Result<&mut [Self::Item]>
    where
        Self::Item: Default,
    {
        into::copy_into(self.into_cursor(), dest)
    }

    fn reverse_into(self, dest: &mut [Self::Item]) -> Result<&mut [Self::Item]>
    where
        Self::Item: Default,
    {
        into::reverse_into(self.into_cursor(), dest)
    }

    fn to_vec(self) -> Vec<Self::Item>
    where
        Self::Item: Default,
    {
        collect::to_vec(self.into_cursor())
    }

    fn to_vec_with(self, config: &CollectConfig) -> Result<Vec<Self::Item>>
    where
        Self::Item: Default,
    {
        collect::to_vec_with(self.into_cursor(), config)
    }

    fn to_array(self) -> Box<[Self::Item]>
    where
        Self::Item: Default,
    {
        collect::to_array(self.into_cursor())
    }

    fn sum(self) -> Self::Item
    where
        Self::Item: Summable,
    {
        sum::sum(self.into_cursor())
    }

    fn sum_by<S, F>(self, map: F) -> S
    where
        Self::Item: Default,
        S: Summable,
        F: FnMut(Self::Item) -> S,
    {
        sum::sum_by(self.into_cursor(), map)
    }
}

impl<S: IntoCursor> Reduce for S {}
