//! Line source over a file or a directory of files

use crate::config::InputConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lines read from one input file, grouped into map-task chunks
#[derive(Debug, Default)]
pub struct LineChunks {
    pub chunks: Vec<Vec<String>>,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

/// List the files to read for an input path
///
/// Anything that is not a directory (a file, a FIFO, `/dev/stdin`) is
/// returned as a single line source. For a directory every regular file directly
/// inside it is returned, sorted by name, skipping names that start with
/// `.` or `_` unless `include_hidden` is set.
pub fn resolve_inputs(path: &Path, config: &InputConfig) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::Input {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !config.include_hidden && is_hidden(entry.file_name().to_string_lossy().as_ref()) {
            debug!("Skipping hidden input {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}

/// Read a file into chunks of at most `chunk_size` lines
///
/// Line terminators (`\n` or `\r\n`) are stripped. Lines that are not
/// valid UTF-8 are skipped with a warning.
pub async fn read_chunks(path: &Path, chunk_size: usize) -> Result<LineChunks> {
    let file = File::open(path).await?;
    let mut segments = BufReader::new(file).split(b'\n');
    let mut result = LineChunks::default();
    let mut current = Vec::with_capacity(chunk_size);
    let mut line_number = 0usize;

    while let Some(mut bytes) = segments.next_segment().await? {
        line_number += 1;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        match String::from_utf8(bytes) {
            Ok(line) => {
                result.lines_read += 1;
                current.push(line);
                if current.len() >= chunk_size {
                    result
                        .chunks
                        .push(std::mem::replace(&mut current, Vec::with_capacity(chunk_size)));
                }
            }
            Err(e) => {
                warn!(
                    "Skipping line {} of {}: {}",
                    line_number,
                    path.display(),
                    e
                );
                result.lines_skipped += 1;
            }
        }
    }

    if !current.is_empty() {
        result.chunks.push(current);
    }
    Ok(result)
}
