//! # lettermatrix
//!
//! Counts, for every word of a text corpus, how often each letter is
//! immediately followed by each other letter, and renders the 26×26 result
//! as a fixed-column text report with row and column totals.
//!
//! ## Usage
//!
//! ```bash
//! lettermatrix [-v] [--config lettermatrix.toml] <INPUT> <OUTPUT>
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing and log level selection
//! - `config` - Run configuration from TOML and environment
//! - `io` - Line source and report sink
//! - `mapreduce` - Pair extraction, grouping, aggregation and rendering
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod mapreduce;

pub use error::{Error, Result};
