//! Long-lived reduce-side aggregator
//!
//! Wraps the pure [`fold_group`]/[`render_report`] pair in an explicit
//! three-stage lifecycle: nothing received yet, groups being accepted, and
//! finalized. Once finalized the matrix is frozen and further calls fail.

use super::formatter::{render_report, Report};
use super::matrix::{reduce_group, Matrix};
use super::row::Row;
use crate::mapreduce::extractor::GroupKey;
use crate::mapreduce::letter::Letter;
use crate::mapreduce::shuffle::Group;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("aggregator already finalized")]
    AlreadyFinalized,
}

/// Lifecycle stage of a [`MatrixAggregator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    Emitting,
    Finalized,
}

/// Accumulates reduced groups into one matrix and renders it once
#[derive(Debug)]
pub struct MatrixAggregator {
    stage: Stage,
    matrix: Matrix,
    lines_seen: usize,
    groups_dropped: usize,
}

impl Default for MatrixAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixAggregator {
    pub fn new() -> Self {
        Self {
            stage: Stage::NotStarted,
            matrix: Matrix::new(),
            lines_seen: 0,
            groups_dropped: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Line-end markers received so far
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Character-keyed groups whose key was not a letter
    pub fn groups_dropped(&self) -> usize {
        self.groups_dropped
    }

    fn begin(&mut self) -> Result<(), AggregationError> {
        match self.stage {
            Stage::Finalized => Err(AggregationError::AlreadyFinalized),
            Stage::NotStarted => {
                self.stage = Stage::Emitting;
                Ok(())
            }
            Stage::Emitting => Ok(()),
        }
    }

    /// Fold one group into the matrix
    ///
    /// Returns the letter whose row was credited, or `None` if the group
    /// was the line-end marker or had a non-letter key.
    pub fn reduce(&mut self, group: &Group) -> Result<Option<Letter>, AggregationError> {
        self.begin()?;

        if group.key == GroupKey::LineMarker {
            self.lines_seen += group.records;
            return Ok(None);
        }

        match reduce_group(group) {
            Some((leading, row)) => {
                trace!(leading = %leading, total = row.total(), "reduced group");
                self.matrix.row_mut(leading).add(&row);
                Ok(Some(leading))
            }
            None => {
                trace!(key = %group.key, records = group.records, "dropped group");
                self.groups_dropped += 1;
                Ok(None)
            }
        }
    }

    /// Add a row reduced elsewhere, e.g. by a parallel worker
    pub fn install_row(&mut self, leading: Letter, row: &Row) -> Result<(), AggregationError> {
        self.begin()?;
        self.matrix.row_mut(leading).add(row);
        Ok(())
    }

    /// Record line-end markers counted elsewhere
    pub fn record_lines(&mut self, lines: usize) -> Result<(), AggregationError> {
        self.begin()?;
        self.lines_seen += lines;
        Ok(())
    }

    /// Record groups dropped elsewhere
    pub fn record_dropped(&mut self, groups: usize) -> Result<(), AggregationError> {
        self.begin()?;
        self.groups_dropped += groups;
        Ok(())
    }

    /// Render the report; valid exactly once
    pub fn finalize(&mut self) -> Result<Report, AggregationError> {
        if self.stage == Stage::Finalized {
            return Err(AggregationError::AlreadyFinalized);
        }
        self.stage = Stage::Finalized;
        Ok(render_report(&self.matrix))
    }
}
