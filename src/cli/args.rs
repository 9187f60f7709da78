//! CLI argument structures

use clap::Parser;
use std::path::PathBuf;

/// Compute a letter-pair adjacency matrix over a text corpus
#[derive(Parser, Debug)]
#[command(name = "lettermatrix")]
#[command(about = "lettermatrix - Count letter-pair adjacency over a text corpus", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to ./lettermatrix.toml if present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Maximum number of concurrent map/reduce tasks
    #[arg(short = 'j', long, value_name = "N")]
    pub max_parallel: Option<usize>,

    /// Input file, or directory of input files
    pub input: PathBuf,

    /// Output file for the report ("-" for stdout)
    pub output: String,
}
