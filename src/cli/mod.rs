mod clipboard;
mod context;
mod flags;
mod help;
mod output;
mod parse;
mod prompts;
mod quiet;

use passforge::pass::{GenerationError, MAX_LENGTH_CEILING};
use thiserror::Error;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Number of passwords must be at least 1")]
    NoPasswords,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl CliError {
    /// 2 for anything the user can fix by changing the invocation.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) | CliError::NoPasswords => 2,
            CliError::Generation(GenerationError::RandomSource(_)) => 1,
            CliError::Generation(_) => 2,
            CliError::Settings(_) | CliError::Output(_) | CliError::Clipboard(_) => 1,
        }
    }

    /// What the user sees. The empty selection gets the UI placeholder text.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Generation(GenerationError::EmptyPool) => {
                "Select at least one character set".to_string()
            }
            CliError::Generation(GenerationError::LengthOutOfRange { length, min, max }) => {
                format!("Length {length} is out of range; choose {min} to {max}")
            }
            CliError::Generation(GenerationError::InvalidBounds { min, max }) => {
                format!("Maximum length {max} is invalid; choose {min} to {MAX_LENGTH_CEILING}")
            }
            CliError::Parse(e) => format!("{e}. Try --help."),
            other => other.to_string(),
        }
    }
}

/// Run the CLI and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut context = match Context::new(&args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e.user_message());
            return e.exit_code();
        }
    };

    match context.run() {
        Ok(()) | Err(Stop::Done) => 0,
        // The clipboard path already reported its own failure.
        Err(Stop::Failed(e @ CliError::Clipboard(_))) => e.exit_code(),
        Err(Stop::Failed(e)) => {
            prompts::error(&e.user_message());
            e.exit_code()
        }
    }
}
