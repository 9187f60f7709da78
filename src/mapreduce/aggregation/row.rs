//! Per-leading-letter count row

use crate::mapreduce::letter::{Letter, ALPHABET_LEN};

/// The 26 following-letter counts for one leading letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    counts: [u64; ALPHABET_LEN],
}

impl Row {
    /// A row with every count at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one occurrence of `following`
    ///
    /// Returns `false`, leaving the row untouched, when the value is not one
    /// of the 26 letters.
    pub fn increment(&mut self, following: char) -> bool {
        match Letter::from_char(following) {
            Some(letter) => {
                self.counts[letter.index()] += 1;
                true
            }
            None => false,
        }
    }

    pub fn count(&self, following: Letter) -> u64 {
        self.counts[following.index()]
    }

    /// Counts in alphabet order
    pub fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Cell-wise addition of another row
    pub fn add(&mut self, other: &Row) {
        for (cell, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *cell += extra;
        }
    }
}
