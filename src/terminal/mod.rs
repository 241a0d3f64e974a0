//! Shared terminal utilities.
//!
//! Box drawing, ANSI colors, and transient status lines.

mod output;

pub use output::*;
