//! CLI handling
//!
//! - Argument parsing structures
//! - Log level selection

pub mod args;
pub mod help;

pub use args::Cli;
pub use help::get_log_level;
