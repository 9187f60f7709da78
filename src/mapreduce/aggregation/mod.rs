//! Reduce-side aggregation and report rendering
//!
//! Groups are folded into a [`Matrix`] of 26 pre-allocated [`Row`]s, then
//! rendered once into a [`Report`].

pub mod aggregator;
pub mod formatter;
pub mod matrix;
pub mod row;

pub use aggregator::{AggregationError, MatrixAggregator, Stage};
pub use formatter::{pad_for, render_report, Report};
pub use matrix::{fold_group, reduce_group, Matrix};
pub use row::Row;
