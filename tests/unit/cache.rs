//! Unit tests for the record cache file.

use libseat_stats::cache::RecordCache;
use libseat_stats::ReservationRecord;

fn sample_records() -> Vec<ReservationRecord> {
    vec![
        ReservationRecord {
            seat_code: "LF2-101".to_string(),
            seat_block: "LF2".to_string(),
            area_prefix: "LF".to_string(),
            date: "2023-05-01".parse().unwrap(),
            time: "08:30:00".parse().unwrap(),
        },
        ReservationRecord {
            seat_code: "F3A-042".to_string(),
            seat_block: "F3A".to_string(),
            area_prefix: "F".to_string(),
            date: "2023-07-02".parse().unwrap(),
            time: "19:45:10".parse().unwrap(),
        },
    ]
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let cache = RecordCache::new(dir.path().join("records.json"));

    let records = sample_records();
    cache.save(&records).unwrap();

    assert!(cache.is_valid());
    assert_eq!(cache.load(), Some(records));
}

#[test]
fn test_missing_file_is_a_silent_miss() {
    let dir = tempfile::tempdir().unwrap();
    let cache = RecordCache::new(dir.path().join("records.json"));

    assert!(!cache.is_valid());
    assert_eq!(cache.load(), None);
}

#[test]
fn test_corrupt_file_is_a_silent_miss() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "[[\"truncated").unwrap();

    let cache = RecordCache::new(&path);
    assert!(!cache.is_valid());
    assert_eq!(cache.load(), None);
}

#[test]
fn test_row_with_bad_date_invalidates_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"[["LF2-101","LF2","LF","2021-13-01","2021-13","2021","08:30:00"]]"#,
    )
    .unwrap();

    assert_eq!(RecordCache::new(&path).load(), None);
}

#[test]
fn test_legacy_row_format_loads() {
    // File shape written by the original tool: one 7-string array per record.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"[["LF2-101", "LF2", "LF", "2023-05-01", "2023-05", "2023", "08:30:00"]]"#,
    )
    .unwrap();

    let records = RecordCache::new(&path).load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].seat_code, "LF2-101");
    assert_eq!(records[0].area_prefix, "LF");
    assert_eq!(records[0].date.to_string(), "2023-05-01");
    assert_eq!(records[0].time.to_string(), "08:30:00");
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let cache = RecordCache::new(dir.path().join("records.json"));

    cache.save(&sample_records()).unwrap();
    cache.save(&sample_records()[..1]).unwrap();

    assert_eq!(cache.load().unwrap().len(), 1);
}
