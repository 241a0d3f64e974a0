//! Settings file persistence.
//!
//! One `key=value` pair per line:
//!
//! ```text
//! length=16
//! number=1
//! classes=upper,lower,digits
//! max_length=128
//! clipboard=false
//! ```

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use passforge::pass::ClassSet;
use thiserror::Error;

use super::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn save(settings: &Settings) -> Result<(), SettingsError> {
    save_to(&get_path(), settings)
}

pub fn load(settings: &mut Settings) -> Result<(), SettingsError> {
    load_from(&get_path(), settings)
}

pub(super) fn save_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;

    let data = format!(
        "length={}\nnumber={}\nclasses={}\nmax_length={}\nclipboard={}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.classes,
        settings.max_length,
        settings.to_clipboard,
    );

    file.write_all(data.as_bytes()).map_err(io_err)?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// Missing file leaves `settings` untouched.
pub(super) fn load_from(path: &Path, settings: &mut Settings) -> Result<(), SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings file at {}", path.display());
            return Ok(());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    apply(&data, settings);
    Ok(())
}

/// Apply every recognized line; bad values keep what `settings` already holds.
fn apply(data: &str, settings: &mut Settings) {
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            log::warn!("ignoring malformed settings line: {line}");
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        let ok = match key {
            "length" => parse_into(value, &mut settings.pass_length),
            "number" => parse_into(value, &mut settings.number_of_passwords),
            "max_length" => parse_into(value, &mut settings.max_length),
            "clipboard" => parse_into(value, &mut settings.to_clipboard),
            "classes" => match ClassSet::parse_list(value) {
                Ok(classes) => {
                    settings.classes = classes;
                    true
                }
                Err(_) => false,
            },
            _ => {
                log::debug!("ignoring unknown settings key: {key}");
                true
            }
        };

        if !ok {
            log::warn!("invalid value for '{key}' in settings: {value}");
        }
    }
}

fn parse_into<T: std::str::FromStr>(value: &str, slot: &mut T) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}
