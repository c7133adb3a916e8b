//! The pull contract every stage of a pipeline implements.
//!
//! A pipeline is a tree of producers resolved at compile time: each
//! combinator owns its inner producer by value, so a chain such as
//! `from_buffer(..).select(..).filter(..)` is a single concrete type with no
//! virtual calls and no boxed closures.

/// Produces values into a caller-provided output buffer, consuming from an
/// input view.
///
/// `I` is the input view the producer reads from:
/// - `&'a [T]` for producers fed by a borrowed buffer,
/// - `&'a mut [T]` for the ordering engine, which reorders its input in place,
/// - `()` for generators (ranges, repeats, iterator adapters).
///
/// Invariants:
/// - `produce` returns `n <= output.len()`; `output[..n]` holds the produced
///   elements in order. Slots past `n` may have been overwritten with
///   unspecified values (filtering compacts in place, slicing skips through
///   the caller's buffer), so consumers must only read the first `n`.
/// - `*input` is advanced past everything consumed and nothing else; values
///   not yet consumed are left untouched.
/// - A return value shorter than `output.len()` means the producer is
///   exhausted. An empty `output` is a legal no-op pull.
/// - No allocation, no blocking, and no alias to `input` or `output` is
///   retained past the call.
pub trait Producer<I> {
    type Item;

    fn produce(&mut self, input: &mut I, output: &mut [Self::Item]) -> usize;
}
