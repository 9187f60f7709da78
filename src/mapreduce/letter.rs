//! The canonical 26-letter alphabet
//!
//! Letters are identified case-insensitively and stored lowercase. Every
//! lookup into a row or matrix goes through [`Letter::index`], so a letter
//! always resolves directly to its slot without scanning.

use std::fmt;

/// Number of letters in the canonical alphabet
pub const ALPHABET_LEN: usize = 26;

/// One of the ASCII letters `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Resolve a character to a letter, folding ASCII case
    ///
    /// Returns `None` for digits, punctuation, whitespace and anything
    /// outside ASCII.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            None
        }
    }

    /// Build a letter from its position in the alphabet
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then(|| Self(index as u8))
    }

    /// Position of this letter in the alphabet, `0..26`
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Lowercase character for this letter
    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }

    /// All 26 letters in alphabet order
    pub fn all() -> impl Iterator<Item = Letter> + Clone {
        (0..ALPHABET_LEN as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
