//! Reducers that write into a caller-provided destination.

use spanseq_core::{Cursor, Error, Producer, Result};

/// Fill as much of `dest` as the sequence allows and return the filled
/// prefix. Elements beyond `dest.len()` are left unconsumed.
pub fn take_into<'d, I, P>(cursor: &mut Cursor<I, P>, dest: &'d mut [P::Item]) -> &'d mut [P::Item]
where
    P: Producer<I>,
{
    let filled = cursor.fill(dest);
    &mut dest[..filled]
}

/// Copy the whole sequence into `dest` and return the filled prefix.
///
/// Fails with `DestinationTooSmall` when `dest` fills up and the sequence
/// still has at least one element. Slots past the returned prefix hold
/// unspecified values: filtering stages use the destination as scratch.
pub fn copy_into<'d, I, P>(mut cursor: Cursor<I, P>, dest: &'d mut [P::Item]) -> Result<&'d mut [P::Item]>
where
    P: Producer<I>,
    P::Item: Default,
{
    let capacity = dest.len();
    let filled = take_into(&mut cursor, dest);
    if filled.len() == capacity {
        let mut extra = [P::Item::default()];
        if cursor.pull(&mut extra) > 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity, "copy_into destination overflowed");
            return Err(Error::DestinationTooSmall { capacity });
        }
    }
    Ok(filled)
}

/// Copy the whole sequence into `dest`, last element first.
pub fn reverse_into<'d, I, P>(cursor: Cursor<I, P>, dest: &'d mut [P::Item]) -> Result<&'d mut [P::Item]>
where
    P: Producer<I>,
    P::Item: Default,
{
    let filled = copy_into(cursor, dest)?;
    filled.reverse();
    Ok(filled)
}

/// Write `source` reversed into the front of `dest`.
///
/// Fails with `InvalidArgument` when `dest` is shorter than `source`.
pub fn reverse_slice_into<'d, T: Clone>(source: &[T], dest: &'d mut [T]) -> Result<&'d mut [T]> {
    if dest.len() < source.len() {
        return Err(Error::invalid_argument(
            "dest",
            "destination is shorter than the source",
        ));
    }
    let dest = &mut dest[..source.len()];
    for (slot, value) in dest.iter_mut().zip(source.iter().rev()) {
        slot.clone_from(value);
    }
    Ok(dest)
}
