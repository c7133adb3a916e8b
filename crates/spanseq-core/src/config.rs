//! Collection configuration that callers can serialize/deserialize.
//!
//! Only the exit point of a pipeline (`to_vec`/`to_array`) allocates, so this
//! is the only tunable surface. Pulls and reducers are not configurable.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Growth step (in elements) when collecting a sequence of unknown length.
    pub chunk_len: usize,

    /// Upper bound on the up-front reservation for a sequence of known length.
    /// Longer sequences still collect fully; they just grow in `chunk_len` steps
    /// past this point.
    pub max_reserve: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            chunk_len: 64,
            max_reserve: 64 * 1024,
        }
    }
}

impl CollectConfig {
    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len;
        self
    }

    pub fn with_max_reserve(mut self, max_reserve: usize) -> Self {
        self.max_reserve = max_reserve;
        self
    }

    /// Reject settings that would make collection loop without progress.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_len == 0 {
            return Err(Error::invalid_argument(
                "chunk_len",
                "collection chunk must hold at least one element",
            ));
        }
        if self.max_reserve == 0 {
            return Err(Error::invalid_argument(
                "max_reserve",
                "reservation cap must be at least one element",
            ));
        }
        Ok(())
    }

    /// Elements to make room for before the next pull.
    pub fn next_step(&self, known_remaining: Option<usize>) -> usize {
        match known_remaining {
            Some(remaining) => remaining.min(self.max_reserve),
            None => self.chunk_len,
        }
    }
}
