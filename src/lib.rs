//! Password generation from character-class pools.
//!
//! The core is [`pass::generate`]: it assembles a pool from the selected
//! [`pass::CharacterClass`]es, draws unbiased indices from the OS CSPRNG
//! ([`rand::OsRandom`]) and returns a [`pass::GeneratedPassword`] that is
//! zeroized on drop.
//!
//! ```no_run
//! use passforge::pass::{generate, CharacterClass, ClassSet, GenerationConfig};
//!
//! let classes: ClassSet = [CharacterClass::Uppercase, CharacterClass::Digits]
//!     .into_iter()
//!     .collect();
//! let password = generate(&GenerationConfig::new(16, classes))?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), passforge::pass::GenerationError>(())
//! ```

pub mod pass;
pub mod rand;
