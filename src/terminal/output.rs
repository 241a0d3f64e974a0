//! Terminal output utilities.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Show `msg` on the current line for `duration`, then erase it.
///
/// The cursor is hidden meanwhile; the exit handler restores it if the wait
/// is interrupted.
pub fn transient(msg: &str, duration: Duration) {
    let mut out = io::stdout();
    if execute!(out, Hide, Print(format!("{GREEN}{msg}{RESET}"))).is_err() {
        println!("{msg}");
        return;
    }
    thread::sleep(duration);
    let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), Show);
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    for line in opt_lines(flag, desc) {
        println!("│ {} │", line);
    }
}

/// Lay out one option row (flag column + wrapped description), each line
/// padded to the box's inner width.
fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    let indent = " ".repeat(flag_col);
    wrapped
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { &flag_padded } else { &indent };
            let padding = desc_col.saturating_sub(text.chars().count());
            format!("{}{}{}", lead, text, " ".repeat(padding))
        })
        .collect()
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_color_codes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn option_rows_fill_inner_width() {
        let lines = opt_lines(
            "  -S, --symbols",
            "Add a long description that certainly needs more than one row to fit inside",
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert_eq!(line.chars().count(), BOX_WIDTH - 4);
        }
        assert!(lines[0].starts_with("  -S, --symbols"));
        assert!(lines[1].starts_with(&" ".repeat(27)));
    }

    #[test]
    fn empty_description_still_renders() {
        let lines = opt_lines("  -h", "");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chars().count(), BOX_WIDTH - 4);
    }
}
