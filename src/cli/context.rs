//! CLI context - bundles settings, flags, and clipboard state.

use passforge::pass::{self, GenerationError};

use super::clipboard::Clipboard;
use super::{CliError, CliFlags, help, output, prompts, quiet};
use crate::settings::{Settings, SettingsError};

/// Why a run stopped before producing output.
#[derive(Debug)]
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Failed(CliError),
}

impl From<CliError> for Stop {
    fn from(e: CliError) -> Self {
        Stop::Failed(e)
    }
}

macro_rules! stop_from {
    ($($err:ty),* $(,)?) => {
        $(impl From<$err> for Stop {
            fn from(e: $err) -> Self {
                Stop::Failed(CliError::from(e))
            }
        })*
    };
}

stop_from!(GenerationError, SettingsError, std::io::Error);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and load settings (unless `--default`).
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self {
            settings,
            clipboard: None,
            flags,
        }
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.validate()?;
        self.handle_save()?;
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            help::print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    pub fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(max) = self.flags.max_length {
            self.settings.max_length = max;
        }
        self.settings.classes = self.flags.resolve_classes(self.settings.classes);
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
    }

    /// Reject settings that cannot produce output, before anything is saved.
    fn validate(&self) -> Result<(), Stop> {
        self.settings.config().validate()?;
        if self.settings.number_of_passwords == 0 {
            return Err(CliError::NoPasswords.into());
        }
        Ok(())
    }

    fn handle_save(&self) -> Result<(), Stop> {
        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved();
        }
        Ok(())
    }

    fn open_clipboard(&mut self) -> Result<(), Stop> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match Clipboard::open() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => {
                log::info!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Stop::Done);
                }
                self.settings.to_clipboard = false;
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Stop> {
        let count = self.settings.number_of_passwords;
        let passwords = pass::generate_batch(&self.settings.config(), count)?;

        match self.clipboard.as_mut() {
            Some(clipboard) => {
                if let Err(e) = clipboard.copy(&passwords) {
                    prompts::clipboard_error(&e);
                    return Err(CliError::Clipboard(e).into());
                }
                prompts::clipboard_copied(passwords.len());
            }
            None => output::print_passwords(&passwords)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use passforge::pass::{CharacterClass, ClassSet};

    use super::*;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        let flags = super::super::parse(&args).unwrap();
        Context::with_settings(flags, Settings::default())
    }

    #[test]
    fn flags_override_settings() {
        let mut ctx = context(&["-l", "40", "-n", "2", "-S", "--no-digits", "-b"]);
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 40);
        assert_eq!(ctx.settings.number_of_passwords, 2);
        assert!(ctx.settings.to_clipboard);
        assert!(ctx.settings.classes.contains(CharacterClass::Symbols));
        assert!(!ctx.settings.classes.contains(CharacterClass::Digits));
    }

    #[test]
    fn untouched_settings_survive() {
        let mut ctx = context(&[]);
        ctx.apply_flags();
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn empty_selection_stops_with_empty_pool() {
        let mut ctx = context(&["-c", ""]);
        assert_eq!(ctx.settings.classes.len(), 3);
        match ctx.run() {
            Err(Stop::Failed(CliError::Generation(GenerationError::EmptyPool))) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(ctx.settings.classes, ClassSet::empty());
    }

    #[test]
    fn over_long_length_stops_before_output() {
        let mut ctx = context(&["-l", "500"]);
        match ctx.run() {
            Err(Stop::Failed(CliError::Generation(GenerationError::LengthOutOfRange {
                length: 500,
                ..
            }))) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn zero_passwords_is_a_usage_error() {
        let mut ctx = context(&["-n", "0", "-l", "8"]);
        match ctx.run() {
            Err(Stop::Failed(CliError::NoPasswords)) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }

        let mut ctx = context(&[]);
        ctx.settings.number_of_passwords = 0;
        assert!(matches!(ctx.run(), Err(Stop::Failed(CliError::NoPasswords))));
    }

    #[test]
    fn huge_max_length_stops_before_output() {
        let max = usize::MAX.to_string();
        let mut ctx = context(&["--max-length", max.as_str(), "-l", max.as_str()]);
        match ctx.run() {
            Err(Stop::Failed(CliError::Generation(GenerationError::InvalidBounds {
                max: usize::MAX,
                ..
            }))) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn inverted_max_length_stops_before_output() {
        let mut ctx = context(&["--max-length", "0", "-l", "1"]);
        assert!(matches!(
            ctx.run(),
            Err(Stop::Failed(CliError::Generation(GenerationError::InvalidBounds {
                min: 1,
                max: 0
            })))
        ));
    }

    #[test]
    fn help_and_version_are_early_exits() {
        assert!(matches!(context(&["-h"]).run(), Err(Stop::Done)));
        assert!(matches!(context(&["-v"]).run(), Err(Stop::Done)));
    }
}
