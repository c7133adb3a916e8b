//! Select: map each element through a function.

use std::mem;

use crate::producer::Producer;

/// Elements pulled from the inner producer per step.
pub(crate) const BATCH: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct Select<P, F> {
    inner: P,
    map: F,
}

impl<P, F> Select<P, F> {
    pub fn new(inner: P, map: F) -> Self {
        Self { inner, map }
    }
}

impl<I, P, F, U> Producer<I> for Select<P, F>
where
    P: Producer<I>,
    P::Item: Default,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn produce(&mut self, input: &mut I, output: &mut [U]) -> usize {
        // Inner values land in an on-stack batch, then move into `map`. Each
        // inner pull asks for no more than the caller still has room for.
        let mut mid: [P::Item; BATCH] = Default::default();
        let mut written = 0;
        while written < output.len() {
            let wanted = (output.len() - written).min(BATCH);
            let pulled = self.inner.produce(input, &mut mid[..wanted]);
            for (slot, value) in output[written..written + pulled]
                .iter_mut()
                .zip(&mut mid[..pulled])
            {
                *slot = (self.map)(mem::take(value));
            }
            written += pulled;
            if pulled < wanted {
                break;
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from_iter, range};

    #[test]
    fn test_maps_across_batches() {
        let mut cursor = range(0, 20).unwrap().select(|n| n * n);
        let mut out = [0; 19];
        assert_eq!(cursor.pull(&mut out), 19);
        assert_eq!(out[18], 324);
        assert_eq!(cursor.pull(&mut out), 1);
        assert_eq!(out[0], 361);
        assert_eq!(cursor.pull(&mut out), 0);
    }

    #[test]
    fn test_never_maps_more_than_requested() {
        let mut mapped = 0;
        let mut cursor = from_iter(0..100).select(|n: i32| {
            mapped += 1;
            n
        });
        let mut out = [0; 3];
        assert_eq!(cursor.pull(&mut out), 3);
        drop(cursor);
        assert_eq!(mapped, 3);
    }
}
