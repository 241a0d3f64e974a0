//! Password generation.

pub mod charset;
mod error;
mod generate;
mod password;

pub use charset::{CharacterClass, ClassSet, UnknownClass};
pub use error::GenerationError;
pub use generate::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DefaultSource, GenerationConfig, LengthBounds,
    MAX_LENGTH_CEILING,
    generate, generate_batch, generate_with,
};
pub use password::GeneratedPassword;
