//! Unit tests for the record pattern.

use libseat_stats::extract::{find_page_count, normalize_page, RecordPattern, DEFAULT_YEAR_RANGE};

use crate::common::history_page;

#[test]
fn test_records_come_back_in_document_order() {
    let page = history_page(
        &[
            ("WNF1-003", "2023-05-01 08:30:00"),
            ("F3A-042", "2023-05-02 09:00:00"),
            ("LF2-101", "2023-05-03 19:45:10"),
        ],
        Some(1),
    );
    let records = RecordPattern::default().extract(&normalize_page(&page));

    let seats: Vec<&str> = records.iter().map(|r| r.seat_code.as_str()).collect();
    assert_eq!(seats, vec!["WNF1-003", "F3A-042", "LF2-101"]);
}

#[test]
fn test_area_prefix_leads_seat_code() {
    let page = history_page(
        &[
            ("LF2-101", "2023-05-01 08:30:00"),
            ("F3A-042", "2023-05-02 09:00:00"),
            ("WNF1-003", "2023-05-03 10:00:00"),
            ("NF4-208", "2023-05-04 11:00:00"),
        ],
        Some(1),
    );
    let records = RecordPattern::default().extract(&normalize_page(&page));
    assert_eq!(records.len(), 4);

    for record in &records {
        assert!(!record.area_prefix.is_empty());
        assert!(record.validate().is_ok(), "{record:?}");
    }
    assert_eq!(records[0].area_prefix, "LF");
    assert_eq!(records[1].area_prefix, "F");
    assert_eq!(records[2].area_prefix, "WNF");
    assert_eq!(records[3].area_prefix, "NF");
}

#[test]
fn test_default_year_range_bounds() {
    let pattern = RecordPattern::default();
    for (stamp, expected) in [
        ("2020-12-31 08:30:00", 0),
        ("2021-01-01 08:30:00", 1),
        ("2024-12-31 08:30:00", 1),
        ("2025-01-01 08:30:00", 0),
    ] {
        let page = history_page(&[("LF2-101", stamp)], None);
        assert_eq!(
            pattern.extract(&normalize_page(&page)).len(),
            expected,
            "{stamp}"
        );
    }
}

#[test]
fn test_widened_year_range_accepts_excluded_years() {
    let pattern = RecordPattern::new(2020..=2025).unwrap();
    let page = history_page(
        &[
            ("LF2-101", "2020-03-01 08:30:00"),
            ("LF2-101", "2025-03-01 08:30:00"),
        ],
        None,
    );
    assert_eq!(pattern.extract(&normalize_page(&page)).len(), 2);
    assert_eq!(*DEFAULT_YEAR_RANGE.start(), 2021);
    assert_eq!(*DEFAULT_YEAR_RANGE.end(), 2024);
}

#[test]
fn test_page_without_records_is_empty_not_an_error() {
    let page = history_page(&[], Some(3));
    let normalized = normalize_page(&page);

    assert!(RecordPattern::default().extract(&normalized).is_empty());
    // Exhaustion detection stays with the page-count marker.
    assert_eq!(find_page_count(&normalized), Some(3));
}

#[test]
fn test_seat_without_dash_matches() {
    let page = history_page(&[("AF1205", "2023-05-01 08:30:00")], None);
    let records = RecordPattern::default().extract(&normalize_page(&page));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].seat_code, "AF1205");
    assert_eq!(records[0].seat_block, "AF1");
    assert_eq!(records[0].area_prefix, "AF");
}
