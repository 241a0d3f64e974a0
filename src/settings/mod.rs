//! Generation preferences.
//!
//! Only preferences are ever written to disk, never passwords.

mod file;

use passforge::pass::{
    CharacterClass, ClassSet, DEFAULT_MAX_LENGTH, GenerationConfig, LengthBounds,
};

pub use file::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub max_length: usize,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self)
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.pass_length, self.classes)
            .with_bounds(LengthBounds::up_to(self.max_length))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            classes: [
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digits,
            ]
            .into_iter()
            .collect(),
            max_length: DEFAULT_MAX_LENGTH,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_symbols_off() {
        let settings = Settings::default();
        assert_eq!(settings.pass_length, 16);
        assert!(!settings.classes.contains(CharacterClass::Symbols));
        assert_eq!(settings.classes.len(), 3);
    }

    #[test]
    fn config_carries_max_length() {
        let settings = Settings {
            pass_length: 200,
            max_length: 256,
            ..Default::default()
        };
        let config = settings.config();
        assert_eq!(config.bounds.max(), 256);
        assert!(config.validate().is_ok());
    }
}
