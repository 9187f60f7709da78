//! The 26×26 letter-pair count matrix and the pure reduce step

use super::row::Row;
use crate::mapreduce::extractor::GroupKey;
use crate::mapreduce::letter::{Letter, ALPHABET_LEN};
use crate::mapreduce::shuffle::Group;

/// Counts for every (leading, following) letter pair
///
/// All 26 rows exist from construction, so any group resolves to its row
/// by index regardless of the order groups arrive in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: [Row; ALPHABET_LEN],
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, leading: Letter) -> &Row {
        &self.rows[leading.index()]
    }

    pub fn row_mut(&mut self, leading: Letter) -> &mut Row {
        &mut self.rows[leading.index()]
    }

    /// Rows paired with their leading letter, in alphabet order
    pub fn rows(&self) -> impl Iterator<Item = (Letter, &Row)> {
        Letter::all().zip(self.rows.iter())
    }

    pub fn cell(&self, leading: Letter, following: Letter) -> u64 {
        self.row(leading).count(following)
    }

    /// Sum of one following-letter column over all rows
    pub fn column_total(&self, following: Letter) -> u64 {
        self.rows.iter().map(|row| row.count(following)).sum()
    }

    pub fn column_totals(&self) -> [u64; ALPHABET_LEN] {
        let mut totals = [0; ALPHABET_LEN];
        for row in &self.rows {
            for (total, count) in totals.iter_mut().zip(row.counts()) {
                *total += count;
            }
        }
        totals
    }

    /// Sum of every cell
    pub fn grand_total(&self) -> u64 {
        self.rows.iter().map(Row::total).sum()
    }

    /// Cell-wise addition of a partial matrix
    pub fn merge(&mut self, other: &Matrix) {
        for (row, extra) in self.rows.iter_mut().zip(other.rows.iter()) {
            row.add(extra);
        }
    }
}

/// Reduce one group into a fresh row
///
/// Returns `None` when the group key is not one of the 26 letters; such
/// groups (the line-end marker, digits, punctuation) carry no pair counts.
pub fn reduce_group(group: &Group) -> Option<(Letter, Row)> {
    let leading = match group.key {
        GroupKey::Char(c) => Letter::from_char(c)?,
        GroupKey::LineMarker => return None,
    };

    let mut row = Row::new();
    for &value in &group.values {
        row.increment(value);
    }
    Some((leading, row))
}

/// Fold one group into an accumulated matrix
pub fn fold_group(mut matrix: Matrix, group: &Group) -> Matrix {
    if let Some((leading, row)) = reduce_group(group) {
        matrix.row_mut(leading).add(&row);
    }
    matrix
}
