//! Unbiased index sampling by rejection.
//!
//! A 32-bit draw `v` maps to `v % n` only when `v` falls below the largest
//! multiple of `n` that fits in `2^32`. Draws above it are discarded, so every
//! index in `[0, n)` has exactly the same number of preimages. For any `n` the
//! rejected zone is smaller than half the domain, so the expected number of
//! draws per index is below 2 (under 1.00000003 for the full 88-character pool).

use zeroize::Zeroizing;

use super::{RandomError, SecureRandom};

const DOMAIN: u64 = 1 << 32;

/// Draws per `fill_bytes` call in [`fill_indices`].
const BATCH: usize = 64;

#[inline]
fn acceptance_zone(n: usize) -> Result<u64, RandomError> {
    if n == 0 {
        return Err(RandomError::EmptyRange);
    }
    let n = u64::try_from(n).map_err(|_| RandomError::RangeTooLarge(n))?;
    if n > DOMAIN {
        return Err(RandomError::RangeTooLarge(n as usize));
    }
    Ok(DOMAIN - DOMAIN % n)
}

/// Returns a uniformly distributed index in `[0, n)`.
pub fn uniform_index<R: SecureRandom + ?Sized>(
    source: &mut R,
    n: usize,
) -> Result<usize, RandomError> {
    let zone = acceptance_zone(n)?;
    loop {
        let draw = u64::from(source.next_u32()?);
        if draw < zone {
            return Ok((draw % n as u64) as usize);
        }
    }
}

/// Fills `out` with independent uniform indices in `[0, n)`.
///
/// Draws are fetched `BATCH` at a time. On error `out` may be partially
/// written; the caller owns clearing it.
pub fn fill_indices<R: SecureRandom + ?Sized>(
    source: &mut R,
    n: usize,
    out: &mut [usize],
) -> Result<(), RandomError> {
    let zone = acceptance_zone(n)?;
    let mut raw = Zeroizing::new([0u8; BATCH * 4]);
    let mut filled = 0;

    while filled < out.len() {
        let wanted = (out.len() - filled).min(BATCH);
        let bytes = &mut raw[..wanted * 4];
        source.fill_bytes(bytes)?;

        for chunk in bytes.chunks_exact(4) {
            let draw = u64::from(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
            if draw < zone {
                out[filled] = (draw % n as u64) as usize;
                filled += 1;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::testing::Scripted;

    #[test]
    fn zone_is_largest_multiple_below_domain() {
        assert_eq!(acceptance_zone(1).unwrap(), DOMAIN);
        assert_eq!(acceptance_zone(64).unwrap(), DOMAIN);
        // 2^32 mod 10 == 6
        assert_eq!(acceptance_zone(10).unwrap(), DOMAIN - 6);
        assert_eq!(acceptance_zone(88).unwrap() % 88, 0);
    }

    #[test]
    fn rejects_empty_and_oversized_ranges() {
        assert!(matches!(acceptance_zone(0), Err(RandomError::EmptyRange)));
        if usize::BITS > 32 {
            let too_big = (DOMAIN + 1) as usize;
            assert!(matches!(
                acceptance_zone(too_big),
                Err(RandomError::RangeTooLarge(_))
            ));
        }
    }

    #[test]
    fn draws_in_rejected_zone_are_skipped() {
        // n = 10: zone starts at 4294967290, so the top six values are rejected.
        let mut rng = Scripted::new([u32::MAX, u32::MAX - 5, 4_294_967_289, 13]);
        assert_eq!(uniform_index(&mut rng, 10).unwrap(), 9);
        assert_eq!(rng.consumed, 3);
        assert_eq!(uniform_index(&mut rng, 10).unwrap(), 3);
    }

    #[test]
    fn power_of_two_range_never_rejects() {
        let mut rng = Scripted::new([u32::MAX, 0, 65]);
        assert_eq!(uniform_index(&mut rng, 64).unwrap(), 63);
        assert_eq!(uniform_index(&mut rng, 64).unwrap(), 0);
        assert_eq!(uniform_index(&mut rng, 64).unwrap(), 1);
        assert_eq!(rng.consumed, 3);
    }

    #[test]
    fn fill_indices_refills_after_rejections() {
        // Three slots, first batch yields one rejection so a second batch is needed.
        let mut rng = Scripted::new([7, u32::MAX, 12, 25]);
        let mut out = [0usize; 3];
        fill_indices(&mut rng, 10, &mut out).unwrap();
        assert_eq!(out, [7, 2, 5]);
        assert_eq!(rng.consumed, 4);
    }

    #[test]
    fn fill_indices_surfaces_source_failure() {
        let mut rng = Scripted::new([1, 2]);
        let mut out = [0usize; 4];
        assert!(matches!(
            fill_indices(&mut rng, 10, &mut out),
            Err(RandomError::Exhausted)
        ));
    }

    #[test]
    fn fill_indices_with_empty_output_draws_nothing() {
        let mut rng = Scripted::new(Vec::<u32>::new());
        fill_indices(&mut rng, 10, &mut []).unwrap();
        assert_eq!(rng.consumed, 0);
    }
}
