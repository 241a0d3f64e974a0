//! Cryptographically secure random source and unbiased index sampling.

mod os;
mod sample;

use thiserror::Error;
use zeroize::Zeroize;

pub use os::OsRandom;
pub use sample::{fill_indices, uniform_index};

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("secure random source failed: {0}")]
    Os(#[from] getrandom::Error),

    #[error("cannot sample an index from an empty range")]
    EmptyRange,

    #[error("range of {0} exceeds the 32-bit sampling domain")]
    RangeTooLarge(usize),

    /// Only produced by test sources.
    #[error("random source exhausted")]
    Exhausted,
}

// =============================================================================
// Source contract
// =============================================================================

/// A source of cryptographically secure random bytes.
///
/// Implementing this trait is a promise that every byte is drawn from a
/// CSPRNG (or the OS entropy pool behind one). General-purpose generators
/// such as xorshift, PCG or a seeded `StdRng` must not implement it, even
/// though they would pass every functional test of the generator.
pub trait SecureRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandomError>;

    fn next_u32(&mut self) -> Result<u32, RandomError> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;
        let value = u32::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }
}

impl<R: SecureRandom + ?Sized> SecureRandom for &mut R {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill_bytes(dest)
    }

    #[inline]
    fn next_u32(&mut self) -> Result<u32, RandomError> {
        (**self).next_u32()
    }
}
