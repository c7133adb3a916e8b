#![forbid(unsafe_code)]
//! spanseq: allocation-free, pull-based sequence pipelines over borrowed
//! buffers.
//!
//! ```
//! use spanseq::prelude::*;
//!
//! let mut values = [3, 1, 5, 7, 2, 8, 10, 9, 4, 6];
//! let mut out = [0; 10];
//! Staged::in_place(&mut values)
//!     .by_value()
//!     .copy_into(&mut out)
//!     .unwrap();
//! assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let evens: i32 = range(0, 10).unwrap().filter(|n| n % 2 == 0).sum();
//! assert_eq!(evens, 20);
//! ```

pub use spanseq_core;
pub use spanseq_order;
pub use spanseq_reduce;

pub use spanseq_core::{
    from_buffer, from_iter, range, repeat, CollectConfig, Cursor, Error, IntoCursor, Producer,
    Result,
};
pub use spanseq_order::{order_by, Aliasing, OrderingPlan, Staged};
pub use spanseq_reduce::{reverse_slice_into, Reduce, Summable};

pub mod prelude {
    pub use spanseq_core::prelude::*;
    pub use spanseq_order::{
        order_by, Aliasing, ByKey, CompareFn, Descending, KeyFn, Natural, OrderingPlan, Staged,
        ThenBy, ValueKey, ValueOrder,
    };
    pub use spanseq_reduce::{reverse_slice_into, Reduce, Summable};
}
