//! OfType: keep the elements that pass a runtime type test.
//!
//! The test is `U: TryFrom<T>`, which covers enum variant extraction and
//! checked numeric narrowing alike.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::combinators::select::BATCH;
use crate::producer::Producer;

pub struct OfType<P, U> {
    inner: P,
    _target: PhantomData<fn() -> U>,
}

impl<P, U> OfType<P, U> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }
}

impl<P: Clone, U> Clone for OfType<P, U> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<P: fmt::Debug, U> fmt::Debug for OfType<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfType")
            .field("inner", &self.inner)
            .field("target", &std::any::type_name::<U>())
            .finish()
    }
}

impl<I, P, U> Producer<I> for OfType<P, U>
where
    P: Producer<I>,
    P::Item: Default,
    U: TryFrom<P::Item>,
{
    type Item = U;

    fn produce(&mut self, input: &mut I, output: &mut [U]) -> usize {
        let mut mid: [P::Item; BATCH] = Default::default();
        let mut written = 0;
        while written < output.len() {
            // At most one converted value per free slot, so nothing pulled
            // is ever lost.
            let wanted = (output.len() - written).min(BATCH);
            let pulled = self.inner.produce(input, &mut mid[..wanted]);
            for value in &mut mid[..pulled] {
                if let Ok(converted) = U::try_from(mem::take(value)) {
                    output[written] = converted;
                    written += 1;
                }
            }
            if pulled < wanted {
                break;
            }
        }
        written
    }
}
