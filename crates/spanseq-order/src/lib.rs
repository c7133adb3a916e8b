#![forbid(unsafe_code)]
//! spanseq-order: lazy heap ordering over a caller-owned buffer.
//!
//! Design intent:
//! - The buffer *is* the heap; ordering never allocates.
//! - Sorting is deferred until the plan is pulled, and proceeds one
//!   extraction per produced element, so `first()` on an ordered sequence
//!   costs O(n) rather than O(n log n).
//! - Value orderings compare in place; values are cloned only when a
//!   drained element is written out.
//! - Multi-key orderings are key/comparer composition, not new algorithms.

pub mod heap;
pub mod key;
pub mod plan;
pub mod producer;

pub use key::{
    ByKey, CompareFn, Descending, KeyComparer, KeyExtractor, KeyFn, Natural, ThenBy, ValueKey,
    ValueOrder,
};
pub use plan::{order_by, Aliasing, OrderingPlan, Staged};
pub use producer::OrderingProducer;
