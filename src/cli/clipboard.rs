//! System clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use passforge::pass::GeneratedPassword;
use zeroize::{Zeroize, Zeroizing};

pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn open() -> Result<Self, String> {
        ClipboardContext::new()
            .map(Clipboard)
            .map_err(|e| e.to_string())
    }

    /// Copy passwords, one per line. Local copies are wiped afterwards.
    pub fn copy(&mut self, passwords: &[GeneratedPassword]) -> Result<(), String> {
        let joined = Zeroizing::new(join_lines(passwords));

        self.0
            .set_contents(joined.as_str().to_owned())
            .map_err(|e| e.to_string())?;

        // Some providers hand back their own copy on read; wipe it too.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} password(s) to clipboard", passwords.len());
        Ok(())
    }
}

fn join_lines(passwords: &[GeneratedPassword]) -> String {
    let capacity = passwords.iter().map(|p| p.as_str().len() + 1).sum();
    let mut joined = String::with_capacity(capacity);
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(pass.as_str());
    }
    joined
}
