//! Consecutive-day check-in streak detection.
//!
//! A streak is a maximal run of calendar dates with no gap between
//! consecutive members. Input dates arrive as a set, so duplicates cannot
//! inflate a run.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Minimum run length a streak needs to be reported individually.
pub const DEFAULT_MIN_STREAK: u32 = 7;

/// One qualifying run of consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    /// Last date of the run
    pub end: NaiveDate,
    /// Number of consecutive days
    pub len: u32,
}

/// Result of a streak analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreakReport {
    /// Length of the longest run; 0 for empty input
    pub longest_len: u32,
    /// End date of the longest run; when several runs tie for longest, the
    /// chronologically first run is the one reported
    pub longest_end: Option<NaiveDate>,
    /// Every run of at least the minimum length, in chronological order
    pub qualifying: Vec<Streak>,
}

/// Detect the longest run and every qualifying run over a set of dates.
///
/// Walks the sorted unique dates once. A run closes when the next date is
/// not exactly one day later; at that point it is pushed to the qualifying
/// list if long enough, and the longest-run tracking updates under strict
/// less-than, so the first-occurring run wins ties. Empty input yields a
/// zero-length report with no end date.
pub fn analyze(dates: &BTreeSet<NaiveDate>, min_streak: u32) -> StreakReport {
    fn close(report: &mut StreakReport, min_streak: u32, end: NaiveDate, len: u32) {
        if len >= min_streak {
            report.qualifying.push(Streak { end, len });
        }
        if report.longest_len < len {
            report.longest_len = len;
            report.longest_end = Some(end);
        }
    }

    let mut report = StreakReport::default();
    let mut iter = dates.iter().copied();

    let Some(first) = iter.next() else {
        return report;
    };

    let mut prev = first;
    let mut current: u32 = 1;

    for date in iter {
        if prev.succ_opt() == Some(date) {
            current += 1;
        } else {
            close(&mut report, min_streak, prev, current);
            current = 1;
        }
        prev = date;
    }
    close(&mut report, min_streak, prev, current);

    report
}
