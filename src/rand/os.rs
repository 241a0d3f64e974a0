//! Operating system CSPRNG.

use super::{RandomError, SecureRandom};

/// The OS random source (`getrandom(2)`, `/dev/urandom`, `ProcessPrng`,
/// `SecRandomCopyBytes`, ... via the `getrandom` crate).
///
/// Zero-sized and stateless, so every thread can use its own copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Name of the backing source, for diagnostics.
    pub fn source_name() -> &'static str {
        #[cfg(target_os = "linux")]
        {
            "getrandom(2)"
        }
        #[cfg(target_os = "macos")]
        {
            "getentropy(2)"
        }
        #[cfg(target_os = "windows")]
        {
            "ProcessPrng"
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            "OS CSPRNG"
        }
    }
}

impl SecureRandom for OsRandom {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        getrandom::fill(dest).map_err(|e| {
            log::warn!("{} failed: {}", Self::source_name(), e);
            RandomError::from(e)
        })
    }

    #[inline]
    fn next_u32(&mut self) -> Result<u32, RandomError> {
        getrandom::u32().map_err(|e| {
            log::warn!("{} failed: {}", Self::source_name(), e);
            RandomError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        // 64 zero bytes from a working CSPRNG has probability 2^-512.
        let mut buf = [0u8; 64];
        OsRandom.fill_bytes(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn successive_draws_differ() {
        let mut rng = OsRandom;
        let draws: Vec<u32> = (0..8).map(|_| rng.next_u32().unwrap()).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn empty_buffer_is_ok() {
        OsRandom.fill_bytes(&mut []).unwrap();
    }
}
