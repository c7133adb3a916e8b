//! Collecting into heap storage. This is the only place the library
//! allocates, and only because the caller asked for an owned collection.

use spanseq_core::{CollectConfig, Cursor, Producer, Result};

/// Collect with the default growth policy.
pub fn to_vec<I, P>(cursor: Cursor<I, P>) -> Vec<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    collect(cursor, &CollectConfig::default())
}

/// Collect with an explicit growth policy. Fails with `InvalidArgument`
/// when `config` does not validate.
pub fn to_vec_with<I, P>(cursor: Cursor<I, P>, config: &CollectConfig) -> Result<Vec<P::Item>>
where
    P: Producer<I>,
    P::Item: Default,
{
    config.validate()?;
    Ok(collect(cursor, config))
}

pub fn to_array<I, P>(cursor: Cursor<I, P>) -> Box<[P::Item]>
where
    P: Producer<I>,
    P::Item: Default,
{
    to_vec(cursor).into_boxed_slice()
}

fn collect<I, P>(mut cursor: Cursor<I, P>, config: &CollectConfig) -> Vec<P::Item>
where
    P: Producer<I>,
    P::Item: Default,
{
    let mut out = Vec::new();
    loop {
        let step = config.next_step(cursor.known_len());
        if step == 0 {
            break;
        }
        let start = out.len();
        out.resize_with(start + step, P::Item::default);

        #[cfg(feature = "tracing")]
        tracing::trace!(len = start, step, "collect grew");

        let pulled = cursor.pull(&mut out[start..]);
        out.truncate(start + pulled);
        if pulled == 0 {
            break;
        }
    }
    out
}
