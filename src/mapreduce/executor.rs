//! Map / shuffle / reduce / finalize pipeline
//!
//! Map tasks run on the blocking pool, bounded by `max_parallel`, and share
//! nothing. Their output is grouped by the [`Shuffler`]; every group is then
//! reduced into a disjoint row by its own task. The coordinator owns the
//! single [`MatrixAggregator`], installs each row as it comes back and
//! finalizes only after every reduce task has finished.

use super::aggregation::{
    fold_group, reduce_group, render_report, Matrix, MatrixAggregator, Report, Row,
};
use super::extractor::{GroupKey, MapOutput, PairExtractor};
use super::letter::Letter;
use super::shuffle::{shuffle, Group, Shuffler};
use crate::config::Config;
use crate::error::Result;
use crate::io::{read_chunks, resolve_inputs, write_report, OutputTarget};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::Path;
use tokio::task;
use tracing::{debug, info};

/// Counters describing one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSummary {
    pub files_read: usize,
    pub lines_read: usize,
    pub lines_skipped: usize,
    /// Line-end markers seen by the aggregator
    pub lines_seen: usize,
    /// Character pairs produced by the map phase, letters or not
    pub observations: usize,
    /// Pairs credited to a matrix cell
    pub credited_pairs: u64,
    pub groups: usize,
    pub groups_dropped: usize,
}

/// Result of reducing one group on a worker
#[derive(Debug)]
enum ReduceOutcome {
    Row(Letter, Row),
    Lines(usize),
    Dropped,
}

fn reduce_outcome(group: &Group) -> ReduceOutcome {
    if group.key == GroupKey::LineMarker {
        return ReduceOutcome::Lines(group.records);
    }
    match reduce_group(group) {
        Some((leading, row)) => ReduceOutcome::Row(leading, row),
        None => ReduceOutcome::Dropped,
    }
}

fn count_observations(outputs: &[MapOutput]) -> usize {
    outputs
        .iter()
        .filter(|o| matches!(o, MapOutput::Pair(_)))
        .count()
}

/// The letter-pair matrix batch job
#[derive(Debug, Clone)]
pub struct LetterMatrixJob {
    config: Config,
    extractor: PairExtractor,
}

impl LetterMatrixJob {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            extractor: PairExtractor::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read `input`, compute the matrix and write the report to `output`
    pub async fn run(&self, input: &Path, output: &OutputTarget) -> Result<JobSummary> {
        let (report, summary) = self.analyze(input).await?;
        write_report(&report, output).await?;
        info!(
            files = summary.files_read,
            lines = summary.lines_read,
            skipped = summary.lines_skipped,
            seen = summary.lines_seen,
            pairs = summary.credited_pairs,
            "Letter matrix complete"
        );
        Ok(summary)
    }

    /// Compute the report for `input` without writing it
    pub async fn analyze(&self, input: &Path) -> Result<(Report, JobSummary)> {
        let files = resolve_inputs(input, &self.config.input)?;
        debug!("Reading {} input file(s) from {}", files.len(), input.display());

        let mut summary = JobSummary {
            files_read: files.len(),
            ..JobSummary::default()
        };
        let mut chunks = Vec::new();
        for file in &files {
            let read = read_chunks(file, self.config.execution.chunk_size).await?;
            summary.lines_read += read.lines_read;
            summary.lines_skipped += read.lines_skipped;
            chunks.extend(read.chunks);
        }

        let shuffler = self.map_phase(chunks, &mut summary).await?;
        let groups = shuffler.into_groups();
        summary.groups = groups.len();

        let mut aggregator = self.reduce_phase(groups).await?;
        summary.groups_dropped = aggregator.groups_dropped();
        summary.lines_seen = aggregator.lines_seen();
        summary.credited_pairs = aggregator.matrix().grand_total();

        let report = aggregator.finalize()?;
        Ok((report, summary))
    }

    async fn map_phase(
        &self,
        chunks: Vec<Vec<String>>,
        summary: &mut JobSummary,
    ) -> Result<Shuffler> {
        debug!("Map phase: {} chunk(s)", chunks.len());
        let extractor = self.extractor;

        let mut outputs = stream::iter(chunks)
            .map(move |chunk| task::spawn_blocking(move || extractor.extract_chunk(&chunk)))
            .buffer_unordered(self.config.execution.max_parallel);

        let mut shuffler = Shuffler::new();
        while let Some(mapped) = outputs.try_next().await? {
            summary.observations += count_observations(&mapped);
            shuffler.absorb(mapped);
        }
        debug!("Shuffle produced {} group(s)", shuffler.group_count());
        Ok(shuffler)
    }

    async fn reduce_phase(&self, groups: Vec<Group>) -> Result<MatrixAggregator> {
        debug!("Reduce phase: {} group(s)", groups.len());

        let mut outcomes = stream::iter(groups)
            .map(|group| task::spawn_blocking(move || reduce_outcome(&group)))
            .buffer_unordered(self.config.execution.max_parallel);

        let mut aggregator = MatrixAggregator::new();
        while let Some(outcome) = outcomes.try_next().await? {
            match outcome {
                ReduceOutcome::Row(leading, row) => aggregator.install_row(leading, &row)?,
                ReduceOutcome::Lines(lines) => aggregator.record_lines(lines)?,
                ReduceOutcome::Dropped => aggregator.record_dropped(1)?,
            }
        }
        Ok(aggregator)
    }
}

/// Single-threaded analysis of in-memory lines
pub fn analyze_lines<S: AsRef<str>>(lines: &[S]) -> Report {
    let groups = shuffle(PairExtractor::new().extract_chunk(lines));
    let matrix = groups.iter().fold(Matrix::new(), fold_group);
    render_report(&matrix)
}
