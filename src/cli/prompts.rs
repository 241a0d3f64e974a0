//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW, transient};

/// How long the clipboard acknowledgment stays on screen.
const COPIED_DISPLAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Clipboard confirmation. On a terminal it is shown briefly, then erased.
pub fn clipboard_copied(count: usize) {
    if quiet::enabled() {
        return;
    }
    let msg = if count == 1 {
        "*** COPIED TO CLIPBOARD ***".to_string()
    } else {
        format!("*** {count} PASSWORDS COPIED TO CLIPBOARD ***")
    };
    if quiet::stdout_is_terminal() {
        transient(&msg, COPIED_DISPLAY);
    } else {
        println!("{msg}");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("{RED}Clipboard error: {err}{RESET}");
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print settings saved confirmation - suppressed in quiet mode
pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Defaults saved.");
    }
}
