use thiserror::Error;

/// Canonical result for every spanseq crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by construction and terminal operations.
///
/// Pulls themselves never fail; every variant is a precondition the caller
/// violated, detected synchronously. Payloads are static so that building
/// an error never allocates.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `first`, `last`, `single` or an unseeded `reduce` found no element.
    #[error("the input sequence is empty")]
    EmptySequence,

    /// The `single` family found a second matching element.
    #[error("the input sequence contains more than one element")]
    MultipleElements,

    /// `copy_into` filled the destination and the source still had elements.
    #[error("destination of length {capacity} is too small for the sequence")]
    DestinationTooSmall { capacity: usize },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub const fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { name, reason }
    }
}
