//! Fixed-column text rendering of the count matrix
//!
//! Every output record is `key<TAB>value`. Counts are followed by a pad
//! whose length depends only on the count's magnitude (see [`pad_for`]),
//! so columns line up only while counts in a column share a digit count.
//! That alignment is part of the output format and is kept as is.

use super::matrix::Matrix;
use super::row::Row;
use crate::mapreduce::letter::Letter;
use std::fmt::Write;

/// Key of the header record
pub const HEADER_KEY: &str = "  ";
/// Key of the separator record
pub const SEPARATOR_KEY: &str = "";
/// Key of the column totals record
pub const TOTALS_KEY: &str = "total:";

const LABEL_PAD: &str = "    ";

/// Trailing pad for a count
pub fn pad_for(count: u64) -> &'static str {
    if count < 10 {
        "    "
    } else if count < 100 {
        "   "
    } else if count < 1000 {
        "  "
    } else {
        " "
    }
}

/// Join a key and value the way each output record is written
pub fn format_record(key: &str, value: &str) -> String {
    format!("{key}\t{value}")
}

fn format_counts<'a>(counts: impl IntoIterator<Item = &'a u64>) -> String {
    let mut line = String::new();
    for &count in counts {
        // Writing to a String cannot fail.
        let _ = write!(line, "{count}{}", pad_for(count));
    }
    line
}

/// Header value: every letter label followed by a four-space pad
pub fn header_value() -> String {
    Letter::all()
        .map(|letter| format!("{letter}{LABEL_PAD}"))
        .collect()
}

/// Row value: padded counts, then `|` and the unpadded row total
pub fn row_value(row: &Row) -> String {
    let mut line = format_counts(row.counts());
    let _ = write!(line, "|{}", row.total());
    line
}

/// Column totals value, padded like a row but without a row total
pub fn totals_value(matrix: &Matrix) -> String {
    format_counts(matrix.column_totals().iter())
}

/// Separator value: the totals value with every character replaced by `_`
pub fn separator_value(totals: &str) -> String {
    "_".repeat(totals.chars().count())
}

/// The rendered report, one string per output record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: String,
    pub rows: Vec<String>,
    pub separator: String,
    pub totals: String,
}

impl Report {
    /// Records in output order: header, 26 rows, separator, totals
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str())
            .chain(self.rows.iter().map(String::as_str))
            .chain([self.separator.as_str(), self.totals.as_str()])
    }

    /// Write every record followed by a newline
    pub fn write_to<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }

    /// Whole report as newline-terminated text
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in self.lines() {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Render a finished matrix
///
/// Rows are emitted in alphabet order and all 26 are always present.
pub fn render_report(matrix: &Matrix) -> Report {
    let rows = matrix
        .rows()
        .map(|(leading, row)| format_record(&leading.to_string(), &row_value(row)))
        .collect();

    let totals = totals_value(matrix);
    Report {
        header: format_record(HEADER_KEY, &header_value()),
        rows,
        separator: format_record(SEPARATOR_KEY, &separator_value(&totals)),
        totals: format_record(TOTALS_KEY, &totals),
    }
}
