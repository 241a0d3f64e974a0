use passforge::pass::{CharacterClass, DEFAULT_MAX_LENGTH};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator backed by the OS CSPRNG");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt(
        "      --max-length <N>",
        &format!("Longest accepted length (default: {DEFAULT_MAX_LENGTH})"),
    );
    box_line("");
    box_line(" Character classes:");
    box_opt("  -c, --classes <LIST>", "Comma-separated: upper,lower,digits,symbols");
    box_opt("  -U, --upper", "Add A-Z");
    box_opt("  -L, --lower", "Add a-z");
    box_opt("  -D, --digits", "Add 0-9");
    box_opt(
        "  -S, --symbols",
        &format!("Add {}", CharacterClass::Symbols.chars()),
    );
    box_opt("      --no-<CLASS>", "Remove a class, e.g. --no-digits");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("      --save", "Save the effective options as defaults");
    box_opt("  -d, --default", "Ignore saved defaults for this run");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                    One password, saved or default options");
    box_line("  passforge -l 24 -S           24 characters, symbols included");
    box_line("  passforge -c digits -l 6     Six-digit PIN");
    box_line("  passforge -n 5 -b            Five passwords to the clipboard");
    box_line("  passforge -l 20 -S --save    Make 20 chars with symbols the default");
    box_line("");
    box_line("Set RUST_LOG=debug for diagnostics. Passwords are never logged.");
    box_bottom();
    println!();
}
