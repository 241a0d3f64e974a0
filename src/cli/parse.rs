use passforge::pass::{CharacterClass, ClassSet, UnknownClass};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("{0}")]
    UnknownClass(#[from] UnknownClass),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "--save" => flags.save = true,
            "-U" | "--upper" => flags.enable.insert(CharacterClass::Uppercase),
            "-L" | "--lower" => flags.enable.insert(CharacterClass::Lowercase),
            "-D" | "--digits" => flags.enable.insert(CharacterClass::Digits),
            "-S" | "--symbols" => flags.enable.insert(CharacterClass::Symbols),
            "--no-upper" => flags.disable.insert(CharacterClass::Uppercase),
            "--no-lower" => flags.disable.insert(CharacterClass::Lowercase),
            "--no-digits" => flags.disable.insert(CharacterClass::Digits),
            "--no-symbols" => flags.disable.insert(CharacterClass::Symbols),
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(args, i, arg)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(args, i, arg)?);
            }
            "--max-length" => {
                i += 1;
                flags.max_length = Some(number(args, i, arg)?);
            }
            "-c" | "--classes" => {
                i += 1;
                // An empty list is a valid (empty) selection.
                let list = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.classes = Some(ClassSet::parse_list(list)?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
