use thiserror::Error;

use crate::rand::RandomError;

/// Why a password could not be generated. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No character class selected.
    #[error("no character classes selected")]
    EmptyPool,

    /// `min > max`, or `max` above the hard ceiling.
    #[error("invalid length bounds {min}..={max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("length {length} is outside the supported range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error(transparent)]
    RandomSource(#[from] RandomError),
}
