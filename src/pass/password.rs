//! Owned password that wipes itself on drop.

use std::fmt;

use zeroize::Zeroizing;

pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub(crate) fn new(inner: Zeroizing<String>) -> Self {
        Self(inner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

    /// Hand the buffer to the caller; it is still zeroized when dropped.
    pub fn into_inner(self) -> Zeroizing<String> {
        self.0
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars redacted>)", self.len())
    }
}
