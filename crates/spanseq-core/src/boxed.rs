//! Type erasure for pipelines.
//!
//! Every combinator chain is its own type. When several chains must be
//! returned through one signature, `Cursor::boxed` hides the chain behind a
//! trait object. Nothing inside the library boxes.

use crate::cursor::Cursor;
use crate::producer::Producer;

/// Object-safe view of a cursor's pull.
pub trait ErasedPull<T> {
    fn pull_erased(&mut self, output: &mut [T]) -> usize;
}

impl<I, P: Producer<I>> ErasedPull<P::Item> for Cursor<I, P> {
    fn pull_erased(&mut self, output: &mut [P::Item]) -> usize {
        self.pull_untracked(output)
    }
}

/// A producer forwarding to a boxed cursor.
pub struct Boxed<'a, T> {
    inner: Box<dyn ErasedPull<T> + 'a>,
}

impl<'a, T> Boxed<'a, T> {
    pub fn new<C: ErasedPull<T> + 'a>(cursor: C) -> Self {
        Self {
            inner: Box::new(cursor),
        }
    }
}

impl<T> Producer<()> for Boxed<'_, T> {
    type Item = T;

    #[inline]
    fn produce(&mut self, _input: &mut (), output: &mut [T]) -> usize {
        self.inner.pull_erased(output)
    }
}

impl<T> std::fmt::Debug for Boxed<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Boxed")
    }
}

/// A cursor whose producer chain has been erased.
pub type BoxedCursor<'a, T> = Cursor<(), Boxed<'a, T>>;
