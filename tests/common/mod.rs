//! Helpers for reading rendered reports back into numbers

#![allow(dead_code)]

pub struct ParsedReport {
    pub header: String,
    /// (label, 26 counts, printed row total)
    pub rows: Vec<(String, Vec<u64>, u64)>,
    pub separator: String,
    pub totals: Vec<u64>,
    pub totals_value: String,
}

fn split_record(line: &str) -> (&str, &str) {
    line.split_once('\t')
        .unwrap_or_else(|| panic!("record without a tab: {line:?}"))
}

fn parse_counts(value: &str) -> Vec<u64> {
    value
        .split_whitespace()
        .map(|n| n.parse().unwrap_or_else(|_| panic!("not a count: {n:?}")))
        .collect()
}

pub fn parse_report(text: &str) -> ParsedReport {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 29, "header + 26 rows + separator + totals");

    let rows = lines[1..27]
        .iter()
        .map(|line| {
            let (key, value) = split_record(line);
            let (counts, total) = value
                .rsplit_once('|')
                .unwrap_or_else(|| panic!("row without a total: {line:?}"));
            (
                key.to_string(),
                parse_counts(counts),
                total.parse().expect("row total"),
            )
        })
        .collect();

    let (separator_key, separator) = split_record(lines[27]);
    assert_eq!(separator_key, "");
    let (totals_key, totals_value) = split_record(lines[28]);
    assert_eq!(totals_key, "total:");

    ParsedReport {
        header: lines[0].to_string(),
        rows,
        separator: separator.to_string(),
        totals: parse_counts(totals_value),
        totals_value: totals_value.to_string(),
    }
}

/// Independent count of adjacent a-z pairs within whitespace-separated words
pub fn count_letter_pairs(lines: &[String]) -> u64 {
    lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .map(|word| {
            let chars: Vec<char> = word.to_lowercase().chars().collect();
            chars
                .windows(2)
                .filter(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_lowercase())
                .count() as u64
        })
        .sum()
}
