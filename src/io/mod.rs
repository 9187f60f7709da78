//! Input and output collaborators of the job

pub mod input;
pub mod output;

pub use input::{read_chunks, resolve_inputs, LineChunks};
pub use output::{write_lines, write_report, OutputTarget};
