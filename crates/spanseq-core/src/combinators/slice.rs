//! Slice: an offset/count window over the inner sequence.

use crate::producer::Producer;

#[derive(Debug, Clone, Copy)]
pub struct Slice<P> {
    inner: P,
    /// Elements still to be discarded before anything is yielded.
    skip: usize,
    /// Elements still allowed through.
    take: usize,
}

impl<P> Slice<P> {
    pub fn new(inner: P, skip: usize, take: usize) -> Self {
        Self { inner, skip, take }
    }
}

impl<I, P: Producer<I>> Producer<I> for Slice<P> {
    type Item = P::Item;

    fn produce(&mut self, input: &mut I, output: &mut [P::Item]) -> usize {
        // The caller's output doubles as the throwaway buffer for skipping.
        while self.skip > 0 {
            let chunk = output.len().min(self.skip);
            let skipped = self.inner.produce(input, &mut output[..chunk]);
            self.skip -= skipped;
            if skipped == 0 {
                return 0;
            }
        }

        let chunk = output.len().min(self.take);
        let written = self.inner.produce(input, &mut output[..chunk]);
        self.take -= written;
        written
    }
}
