use crate::mapreduce::aggregation::AggregationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Worker task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Join(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
