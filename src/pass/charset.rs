//! Character classes and pool assembly.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The class's characters, in fixed order. Never empty, no repeats.
    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Number of characters in the class.
    pub fn size(self) -> usize {
        self.chars().chars().count()
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Short name used on the command line and in the settings file.
    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "upper",
            CharacterClass::Lowercase => "lower",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character class '{0}' (expected upper, lower, digits or symbols)")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digits" | "digit" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" | "symbol" => Ok(CharacterClass::Symbols),
            _ => Err(UnknownClass(s.trim().to_string())),
        }
    }
}

// =============================================================================
// ClassSet
// =============================================================================

/// Set of enabled classes. May be empty; iterates in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub const fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }

    /// Parse a comma-separated list of class names. An empty string is the
    /// empty set.
    pub fn parse_list(s: &str) -> Result<Self, UnknownClass> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<CharacterClass>)
            .collect()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    /// Comma-separated names in canonical order; empty set renders as "".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(class.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Pool
// =============================================================================

/// Build the character pool: enabled classes concatenated in canonical order.
pub fn pool(classes: ClassSet) -> Vec<char> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend(class.chars().chars());
    }
    chars
}

/// Pool size without building it.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(CharacterClass::size).sum()
}
