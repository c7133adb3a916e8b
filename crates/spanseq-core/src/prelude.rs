//! Convenient re-exports for downstream crates.

pub use crate::boxed::BoxedCursor;
pub use crate::config::CollectConfig;
pub use crate::cursor::{Cursor, IntoCursor};
pub use crate::error::{Error, Result};
pub use crate::producer::Producer;
pub use crate::source::{from_buffer, from_iter, range, repeat};
