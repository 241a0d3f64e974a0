use std::io::{self, Write};

use passforge::pass::GeneratedPassword;

/// Write passwords to `out`, one per line.
pub fn write_passwords<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    for pass in passwords {
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn print_passwords(passwords: &[GeneratedPassword]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_passwords(&mut out, passwords)
}
