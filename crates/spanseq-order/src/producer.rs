//! Producer draining a heap-ordered buffer.

use spanseq_core::Producer;

use crate::heap::extract_min;
use crate::key::ValueOrder;

/// Yields the elements of a heapified buffer in ascending `order`.
///
/// The input view is the live heap; every pull shrinks it from the front by
/// the number of elements produced. Once fully drained, the backing buffer
/// holds the sorted sequence. Values are cloned only when written out.
#[derive(Debug, Clone)]
pub struct OrderingProducer<O> {
    order: O,
}

impl<O> OrderingProducer<O> {
    pub fn new(order: O) -> Self {
        Self { order }
    }
}

impl<'a, T, O> Producer<&'a mut [T]> for OrderingProducer<O>
where
    T: Clone,
    O: ValueOrder<T>,
{
    type Item = T;

    fn produce(&mut self, input: &mut &'a mut [T], output: &mut [T]) -> usize {
        let mut written = 0;
        for slot in output.iter_mut() {
            match extract_min(input, &self.order) {
                Some(min) => slot.clone_from(min),
                None => break,
            }
            written += 1;
        }
        written
    }
}
