//! Property tests for the letter-pair matrix
//!
//! These verify:
//! - Cell sum equals the number of adjacent letter pairs in the corpus
//! - Printed row totals and column totals agree with the counts
//! - Determinism: same input → byte-identical report
//! - Order invariance over lines and over group arrival

mod common;

use common::{count_letter_pairs, parse_report};
use lettermatrix::mapreduce::aggregation::{render_report, MatrixAggregator};
use lettermatrix::mapreduce::{analyze_lines, shuffle, PairExtractor};
use proptest::prelude::*;

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 .,!'\t-]{0,40}", 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every adjacent letter pair lands in exactly one cell
    #[test]
    fn prop_cell_sum_equals_pair_count(lines in corpus()) {
        let parsed = parse_report(&analyze_lines(&lines).to_text());
        let cells: u64 = parsed.rows.iter().flat_map(|(_, counts, _)| counts.iter()).sum();
        prop_assert_eq!(cells, count_letter_pairs(&lines));
    }

    /// Property: printed row totals are the sums of their rows
    #[test]
    fn prop_row_totals_match(lines in corpus()) {
        let parsed = parse_report(&analyze_lines(&lines).to_text());
        for (label, counts, total) in &parsed.rows {
            prop_assert_eq!(counts.len(), 26);
            prop_assert_eq!(counts.iter().sum::<u64>(), *total, "row {}", label);
        }
    }

    /// Property: column totals sum each column and both grand totals agree
    #[test]
    fn prop_column_totals_match(lines in corpus()) {
        let parsed = parse_report(&analyze_lines(&lines).to_text());
        prop_assert_eq!(parsed.totals.len(), 26);
        for column in 0..26 {
            let sum: u64 = parsed.rows.iter().map(|(_, counts, _)| counts[column]).sum();
            prop_assert_eq!(parsed.totals[column], sum);
        }
        let row_grand: u64 = parsed.rows.iter().map(|(_, _, total)| total).sum();
        let column_grand: u64 = parsed.totals.iter().sum();
        prop_assert_eq!(row_grand, column_grand);
    }

    /// Property: separator is all underscores, as wide as the totals value
    #[test]
    fn prop_separator_matches_totals(lines in corpus()) {
        let parsed = parse_report(&analyze_lines(&lines).to_text());
        prop_assert_eq!(parsed.separator.len(), parsed.totals_value.len());
        prop_assert!(parsed.separator.chars().all(|c| c == '_'));
    }

    /// Property: rows are always labelled a..z in order
    #[test]
    fn prop_rows_in_alphabet_order(lines in corpus()) {
        let parsed = parse_report(&analyze_lines(&lines).to_text());
        let labels: String = parsed.rows.iter().map(|(label, _, _)| label.as_str()).collect();
        prop_assert_eq!(labels, "abcdefghijklmnopqrstuvwxyz");
    }

    /// Property: rendering is deterministic
    #[test]
    fn prop_deterministic(lines in corpus()) {
        prop_assert_eq!(analyze_lines(&lines).to_text(), analyze_lines(&lines).to_text());
    }

    /// Property: permuting input lines does not change the report
    #[test]
    fn prop_line_order_invariant(
        (lines, permuted) in corpus().prop_flat_map(|lines| {
            let permuted = Just(lines.clone()).prop_shuffle();
            (Just(lines), permuted)
        })
    ) {
        prop_assert_eq!(analyze_lines(&lines), analyze_lines(&permuted));
    }

    /// Property: group arrival order and value order within a group do not matter
    #[test]
    fn prop_group_order_invariant(lines in corpus(), rotate in 0usize..64) {
        let groups = shuffle(PairExtractor::new().extract_chunk(&lines));

        let mut in_order = MatrixAggregator::new();
        for group in &groups {
            in_order.reduce(group).unwrap();
        }

        let mut scrambled = MatrixAggregator::new();
        let mut reordered = groups.clone();
        if !reordered.is_empty() {
            let by = rotate % reordered.len();
            reordered.rotate_left(by);
        }
        reordered.reverse();
        for group in &mut reordered {
            group.values.reverse();
            scrambled.reduce(group).unwrap();
        }

        prop_assert_eq!(in_order.matrix(), scrambled.matrix());
        prop_assert_eq!(
            in_order.finalize().unwrap(),
            render_report(scrambled.matrix())
        );
    }
}
