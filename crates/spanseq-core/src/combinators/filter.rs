//! Filter (Where): keep the elements that satisfy a predicate.

use crate::producer::Producer;

#[derive(Debug, Clone, Copy)]
pub struct Filter<P, F> {
    inner: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(inner: P, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<I, P, F> Producer<I> for Filter<P, F>
where
    P: Producer<I>,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn produce(&mut self, input: &mut I, output: &mut [P::Item]) -> usize {
        let mut kept = 0;
        // A single inner pull may yield no match at all, so keep pulling into
        // the unfilled tail until it is full or the inner producer runs dry.
        while kept < output.len() {
            let wanted = output.len() - kept;
            let start = kept;
            let pulled = self.inner.produce(input, &mut output[start..]);

            for i in start..start + pulled {
                if (self.predicate)(&output[i]) {
                    output.swap(kept, i);
                    kept += 1;
                }
            }

            if pulled < wanted {
                break;
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from_buffer, range};

    #[test]
    fn test_refills_until_output_full() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut cursor = from_buffer(&data).filter(|n| n % 3 == 0);
        let mut out = [0; 2];
        assert_eq!(cursor.pull(&mut out), 2);
        assert_eq!(out, [3, 6]);
        assert_eq!(cursor.pull(&mut out), 1);
        assert_eq!(out[0], 9);
        assert_eq!(cursor.pull(&mut out), 0);
    }

    #[test]
    fn test_no_match_drains_inner() {
        let mut cursor = range(0, 100).unwrap().filter(|n| *n < 0);
        let mut out = [0; 8];
        assert_eq!(cursor.pull(&mut out), 0);
    }

    #[test]
    fn test_length_becomes_unknown() {
        let cursor = range(0, 5).unwrap().filter(|_| true);
        assert_eq!(cursor.known_len(), None);
    }
}
