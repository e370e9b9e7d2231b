//! Unit tests for streak detection edge cases.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use libseat_stats::analysis::streak::{analyze, DEFAULT_MIN_STREAK};

fn dates(specs: &[&str]) -> BTreeSet<NaiveDate> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_duplicate_dates_do_not_inflate_a_streak() {
    // The set collapses the duplicate, so {d, d, d+1} is a 2-day run.
    let input = dates(&["2023-05-01", "2023-05-01", "2023-05-02"]);
    assert_eq!(input.len(), 2);

    let report = analyze(&input, DEFAULT_MIN_STREAK);
    assert_eq!(report.longest_len, 2);
}

#[test]
fn test_minimum_length_boundary() {
    let six_days = dates(&[
        "2023-05-01",
        "2023-05-02",
        "2023-05-03",
        "2023-05-04",
        "2023-05-05",
        "2023-05-06",
    ]);

    // One below the threshold: longest, but not qualifying.
    let report = analyze(&six_days, DEFAULT_MIN_STREAK);
    assert_eq!(report.longest_len, 6);
    assert!(report.qualifying.is_empty());

    // Exactly at the threshold: qualifying.
    let report = analyze(&six_days, 6);
    assert_eq!(report.qualifying.len(), 1);
    assert_eq!(report.qualifying[0].len, 6);
}

#[test]
fn test_qualifying_streaks_are_chronological() {
    let report = analyze(
        &dates(&[
            "2023-01-01",
            "2023-01-02",
            "2023-02-10",
            "2023-02-11",
            "2023-02-12",
            "2023-04-01",
            "2023-04-02",
        ]),
        2,
    );

    let ends: Vec<String> = report.qualifying.iter().map(|s| s.end.to_string()).collect();
    assert_eq!(ends, vec!["2023-01-02", "2023-02-12", "2023-04-02"]);
    assert_eq!(report.longest_len, 3);
    assert_eq!(report.longest_end, Some("2023-02-12".parse().unwrap()));
}

#[test]
fn test_year_boundary_is_consecutive() {
    let report = analyze(&dates(&["2023-12-31", "2024-01-01"]), 2);
    assert_eq!(report.longest_len, 2);
    assert_eq!(report.longest_end, Some("2024-01-01".parse().unwrap()));
}

#[test]
fn test_trailing_open_streak_is_closed() {
    // The longest run sits at the very end of the input.
    let report = analyze(
        &dates(&["2023-05-01", "2023-06-01", "2023-06-02", "2023-06-03"]),
        3,
    );
    assert_eq!(report.longest_len, 3);
    assert_eq!(report.longest_end, Some("2023-06-03".parse().unwrap()));
    assert_eq!(report.qualifying.len(), 1);
}
