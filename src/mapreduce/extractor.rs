//! Map phase: adjacent character pairs from raw text lines
//!
//! The extractor is stateless. Each line is split on whitespace runs, every
//! token is lowercased and each pair of neighbouring characters becomes one
//! [`Observation`]. A [`MapOutput::LineEnd`] marker closes every line so the
//! reduce side can tell that input was seen even when no pair was produced.
//!
//! Non-letter characters are paired like any other character; filtering
//! them out is the aggregator's job.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid regex pattern"));

/// Two adjacent characters from one lowercased token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    pub leading: char,
    pub following: char,
}

/// Grouping key delivered to the reduce side
///
/// `LineMarker` sorts before every character key, mirroring the empty key
/// of the line-end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    LineMarker,
    Char(char),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::LineMarker => write!(f, "<line-end>"),
            GroupKey::Char(c) => write!(f, "{c:?}"),
        }
    }
}

/// One record emitted by the map phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOutput {
    Pair(Observation),
    LineEnd,
}

impl MapOutput {
    /// Key this record is grouped under
    pub fn key(&self) -> GroupKey {
        match self {
            MapOutput::Pair(obs) => GroupKey::Char(obs.leading),
            MapOutput::LineEnd => GroupKey::LineMarker,
        }
    }

    /// Value carried to the reduce side, `None` for the line-end marker
    pub fn value(&self) -> Option<char> {
        match self {
            MapOutput::Pair(obs) => Some(obs.following),
            MapOutput::LineEnd => None,
        }
    }
}

/// Stateless pair extractor, safe to share across map workers
#[derive(Debug, Clone, Copy, Default)]
pub struct PairExtractor;

impl PairExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every observation from one line, followed by a line-end marker
    pub fn extract(&self, line: &str) -> Vec<MapOutput> {
        let mut outputs = Vec::with_capacity(line.len() + 1);
        self.extract_into(line, &mut outputs);
        outputs
    }

    /// Extract a batch of lines into one buffer
    pub fn extract_chunk<S: AsRef<str>>(&self, lines: &[S]) -> Vec<MapOutput> {
        let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
        let mut outputs = Vec::with_capacity(capacity);
        for line in lines {
            self.extract_into(line.as_ref(), &mut outputs);
        }
        outputs
    }

    fn extract_into(&self, line: &str, outputs: &mut Vec<MapOutput>) {
        for token in WHITESPACE.split(line).filter(|t| !t.is_empty()) {
            let folded: Vec<char> = token.to_lowercase().chars().collect();
            outputs.extend(folded.windows(2).map(|pair| {
                MapOutput::Pair(Observation {
                    leading: pair[0],
                    following: pair[1],
                })
            }));
        }
        outputs.push(MapOutput::LineEnd);
    }
}
