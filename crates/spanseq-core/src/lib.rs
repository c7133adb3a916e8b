#![forbid(unsafe_code)]
//! spanseq-core: the pull contract and everything that rides on it.
//!
//! Design intent:
//! - A pipeline is a compile-time tree of `Producer`s driven through a
//!   `Cursor`. No stage allocates, boxes a closure or materializes an
//!   intermediate collection.
//! - Input buffers are borrowed for exactly one traversal.
//! - Validation happens when a stage is built, never during a pull.

pub mod boxed;
pub mod combinators;
pub mod config;
pub mod cursor;
pub mod error;
pub mod prelude;
pub mod producer;
pub mod source;

pub use config::CollectConfig;
pub use cursor::{Cursor, CursorIter, IntoCursor};
pub use error::{Error, Result};
pub use producer::Producer;
pub use source::{from_buffer, from_iter, range, repeat};
