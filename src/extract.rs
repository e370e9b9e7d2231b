//! Check-in record extraction from reservation-history pages.
//!
//! The origin site renders one `<td>` pair per check-in. The markup is not
//! whitespace-sensitive, so pages are normalized by stripping every blank
//! character before matching a single fixed-structure pattern:
//! `<seat code></td><td><date><time>`.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::ReservationRecord;

/// Years the default pattern accepts.
///
/// Check-ins dated outside this range are silently skipped, matching the
/// behavior of the legacy tool. Widen the range via [`RecordPattern::new`]
/// to audit a different period.
pub const DEFAULT_YEAR_RANGE: RangeInclusive<u16> = 2021..=2024;

/// Marker anchoring the link to the final history page.
///
/// Only present on a well-formed page 1; its absence means the site layout
/// changed or the session token is invalid.
static PAGE_COUNT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="end"href="/user/index/book/status/4/p/([0-9]+)">"#)
        .expect("page-count marker pattern must compile")
});

/// Strip every blank character from a raw page body.
///
/// Removes spaces, newlines, tabs and carriage returns so the record pattern
/// can anchor on adjacent markup regardless of server-side formatting.
pub fn normalize_page(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\t' | '\r'))
        .collect()
}

/// Locate the total-page-count marker in normalized page text.
pub fn find_page_count(page_text: &str) -> Option<u32> {
    PAGE_COUNT_MARKER
        .captures(page_text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Compiled pattern matching one check-in row in normalized page text.
///
/// Capture groups, in order: full seat code, seat block (area prefix plus
/// floor designator), area prefix, date, month, year, time of day. The month
/// and day fields are syntactic two-digit checks only; the day is not
/// validated against month length at pattern level.
#[derive(Debug, Clone)]
pub struct RecordPattern {
    regex: Regex,
}

impl RecordPattern {
    /// Compile the record pattern for the given year range.
    pub fn new(years: RangeInclusive<u16>) -> Result<Self, regex::Error> {
        let year_alt = years
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"((([A-Z]{{0,2}}F)[0-9][A-Z]?)-?[0-9]{{3}})</td><td>((({year_alt})-[0-1][0-9])-[0-3][0-9])([0-2][0-9]:[0-5][0-9]:[0-5][0-9])"
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Number of raw pattern matches in the page text.
    ///
    /// Unlike [`extract`](Self::extract), syntactically valid but
    /// non-calendar dates (e.g. `2021-02-30`) still count here.
    pub fn match_count(&self, page_text: &str) -> usize {
        self.regex.find_iter(page_text).count()
    }

    /// Extract every check-in record from normalized page text, in document
    /// order.
    ///
    /// A page producing zero records is not an error by itself; fetch
    /// exhaustion is detected through the page-count marker, not through
    /// empty results. Matches whose date fails calendar validation are
    /// dropped with a warning.
    pub fn extract(&self, page_text: &str) -> Vec<ReservationRecord> {
        let mut records = Vec::new();

        for caps in self.regex.captures_iter(page_text) {
            let date_str = &caps[4];
            let time_str = &caps[7];

            let date = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    warn!(date = date_str, "dropping record with non-calendar date");
                    continue;
                }
            };
            let time = match NaiveTime::parse_from_str(time_str, "%H:%M:%S") {
                Ok(time) => time,
                Err(_) => {
                    warn!(time = time_str, "dropping record with invalid time of day");
                    continue;
                }
            };

            records.push(ReservationRecord {
                seat_code: caps[1].to_string(),
                seat_block: caps[2].to_string(),
                area_prefix: caps[3].to_string(),
                date,
                time,
            });
        }

        records
    }
}

impl Default for RecordPattern {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_RANGE).expect("default record pattern must compile")
    }
}
