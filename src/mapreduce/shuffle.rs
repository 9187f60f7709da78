//! Grouping of map output by key
//!
//! Stands in for the distributed shuffle: every record sharing a key ends
//! up in one [`Group`], and each distinct key appears exactly once across
//! the run. Group order is the key order of a `BTreeMap`, which callers
//! must not rely on for report ordering.

use super::extractor::{GroupKey, MapOutput};
use std::collections::BTreeMap;

/// All values sharing one grouping key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: GroupKey,
    pub values: Vec<char>,
    /// Number of records folded into this group, markers included
    pub records: usize,
}

impl Group {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            values: Vec::new(),
            records: 0,
        }
    }

    /// Convenience constructor for a character-keyed group
    pub fn with_values(leading: char, values: impl IntoIterator<Item = char>) -> Self {
        let values: Vec<char> = values.into_iter().collect();
        Self {
            key: GroupKey::Char(leading),
            records: values.len(),
            values,
        }
    }
}

/// Accumulates map output from any number of map tasks
#[derive(Debug, Default)]
pub struct Shuffler {
    groups: BTreeMap<GroupKey, Group>,
}

impl Shuffler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route every record to the group for its key
    pub fn absorb(&mut self, outputs: impl IntoIterator<Item = MapOutput>) {
        for output in outputs {
            let key = output.key();
            let group = self.groups.entry(key).or_insert_with(|| Group::new(key));
            group.records += 1;
            if let Some(value) = output.value() {
                group.values.push(value);
            }
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups.into_values().collect()
    }
}

/// Group a single batch of map output
pub fn shuffle(outputs: impl IntoIterator<Item = MapOutput>) -> Vec<Group> {
    let mut shuffler = Shuffler::new();
    shuffler.absorb(outputs);
    shuffler.into_groups()
}
