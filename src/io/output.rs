//! Line sink for the rendered report

use crate::error::Result;
use crate::mapreduce::aggregation::Report;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

/// Where the report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

/// Write every record of `report`, newline-terminated
pub async fn write_report(report: &Report, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => write_lines(report, tokio::io::stdout()).await,
        OutputTarget::File(path) => write_file(report, path).await,
    }
}

async fn write_file(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    debug!("Writing report to {}", path.display());
    let file = tokio::fs::File::create(path).await?;
    write_lines(report, file).await
}

/// Write a report to any async sink
pub async fn write_lines<W>(report: &Report, sink: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(sink);
    for line in report.lines() {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}
