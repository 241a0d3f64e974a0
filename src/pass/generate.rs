//! Password generation.

use std::ops::RangeInclusive;

use zeroize::Zeroizing;

use super::charset::{self, ClassSet};
use super::{GeneratedPassword, GenerationError};
use crate::rand::{self, OsRandom, SecureRandom};

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 128;
/// Largest upper bound a [`LengthBounds`] may carry.
pub const MAX_LENGTH_CEILING: usize = 1 << 16;

/// Source used by [`generate`] and [`generate_batch`].
pub type DefaultSource = OsRandom;

/// Inclusive range of accepted password lengths. The lower bound is never
/// below 1. Inverted bounds, or an upper bound above [`MAX_LENGTH_CEILING`],
/// are rejected by [`GenerationConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: min.max(DEFAULT_MIN_LENGTH),
            max,
        }
    }

    pub fn up_to(max: usize) -> Self {
        Self::new(DEFAULT_MIN_LENGTH, max)
    }

    pub fn min(self) -> usize {
        self.min
    }

    pub fn max(self) -> usize {
        self.max
    }

    pub fn contains(self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    pub fn is_valid(self) -> bool {
        self.min <= self.max && self.max <= MAX_LENGTH_CEILING
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

impl From<RangeInclusive<usize>> for LengthBounds {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// What to generate. Not validated until [`generate`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
    pub bounds: LengthBounds,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length,
            classes,
            bounds: LengthBounds::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: impl Into<LengthBounds>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Empty selection is reported first, then bad bounds, then a bad length.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.classes.is_empty() {
            return Err(GenerationError::EmptyPool);
        }
        if !self.bounds.is_valid() {
            return Err(GenerationError::InvalidBounds {
                min: self.bounds.min(),
                max: self.bounds.max(),
            });
        }
        if !self.bounds.contains(self.length) {
            return Err(GenerationError::LengthOutOfRange {
                length: self.length,
                min: self.bounds.min(),
                max: self.bounds.max(),
            });
        }
        Ok(())
    }
}

/// Generate one password from the OS CSPRNG.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError> {
    generate_with(config, &mut DefaultSource::default())
}

/// Generate one password from an explicit source.
///
/// Each character is an independent, unbiased draw from the pool (see
/// [`rand::fill_indices`]). Either the whole password is produced or an error
/// is returned; intermediate buffers are zeroized on both paths.
pub fn generate_with<R: SecureRandom + ?Sized>(
    config: &GenerationConfig,
    source: &mut R,
) -> Result<GeneratedPassword, GenerationError> {
    config.validate()?;

    let chars = charset::pool(config.classes);
    log::debug!(
        "generating {} chars from {}-char pool [{}]",
        config.length,
        chars.len(),
        config.classes
    );

    let mut indices = Zeroizing::new(vec![0usize; config.length]);
    rand::fill_indices(source, chars.len(), &mut indices)?;

    // Reserve up front: a reallocation would leave an unwiped copy behind.
    let widest = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut pass = Zeroizing::new(String::with_capacity(config.length * widest));
    pass.extend(indices.iter().map(|&i| chars[i]));

    Ok(GeneratedPassword::new(pass))
}

/// Generate `count` passwords with the same config. All or nothing.
pub fn generate_batch(
    config: &GenerationConfig,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GenerationError> {
    config.validate()?;
    let mut source = DefaultSource::default();
    (0..count)
        .map(|_| generate_with(config, &mut source))
        .collect()
}
