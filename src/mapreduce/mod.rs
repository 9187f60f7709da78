//! Letter-pair counting as a map/reduce job
//!
//! - `extractor` - map phase, raw lines to adjacent character pairs
//! - `shuffle` - grouping of map output by leading character
//! - `aggregation` - reduce phase, count matrix and report rendering
//! - `executor` - parallel pipeline tying the phases together

pub mod aggregation;
pub mod executor;
pub mod extractor;
pub mod letter;
pub mod shuffle;

pub use aggregation::{MatrixAggregator, Report};
pub use executor::{analyze_lines, JobSummary, LetterMatrixJob};
pub use extractor::{GroupKey, MapOutput, Observation, PairExtractor};
pub use letter::Letter;
pub use shuffle::{shuffle, Group, Shuffler};
