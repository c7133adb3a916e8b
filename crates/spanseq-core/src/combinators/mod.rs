//! Producers that wrap another producer to add a transformation stage.
//!
//! Each combinator owns its inner producer by value and is generic over the
//! input view, so it composes the same way over buffers, generators and the
//! ordering engine.

pub mod filter;
pub mod of_type;
pub mod select;
pub mod slice;

pub use filter::Filter;
pub use of_type::OfType;
pub use select::Select;
pub use slice::Slice;
