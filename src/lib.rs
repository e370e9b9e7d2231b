//! # Library Seat Check-in Statistics
//!
//! A library for retrieving a user's historical library-seat check-in records
//! from a paginated, cookie-authenticated reservation-history endpoint,
//! caching them locally, and computing descriptive statistics over them.
//!
//! ## Features
//!
//! - **Paginated fetching**: walks every page of the reservation history
//!   strictly sequentially, one outstanding request at a time
//! - **Local caching**: the full record set is snapshotted to a JSON file
//!   compatible with the legacy row format, so repeat runs skip the network
//! - **Usage statistics**: check-in counts by seat, area block, library,
//!   month and hour, plus a consecutive-day streak analysis
//! - **Fail loud and whole**: any transport or protocol failure aborts the
//!   fetch rather than surfacing a partial page range
//!
//! ## Quick Start
//!
//! ```no_run
//! use libseat_stats::cache::RecordCache;
//! use libseat_stats::config::Account;
//! use libseat_stats::extract::RecordPattern;
//! use libseat_stats::fetcher::http::{SeatHttpClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
//! use libseat_stats::fetcher::pagination::HistoryFetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let account = Account {
//!     id: "2021012345".to_string(),
//!     token: "0123abcd".to_string(),
//! };
//!
//! let pattern = RecordPattern::default();
//! let client = SeatHttpClient::new(DEFAULT_BASE_URL, account, DEFAULT_TIMEOUT)?;
//! let fetcher = HistoryFetcher::new(&pattern);
//!
//! let cache = RecordCache::new("records.json");
//! let (records, origin) = cache.load_or_fetch(true, &fetcher, &client).await?;
//! println!("{} check-ins ({origin:?})", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`extract`] - Record extraction from normalized page text
//! - [`fetcher`] - HTTP page retrieval and pagination
//! - [`cache`] - Record cache with legacy row-format compatibility
//! - [`config`] - Account credential loading and persistence
//! - [`prompt`] - Refetch choice parsing decoupled from console I/O
//! - [`analysis`] - Streak detection and usage aggregation
//! - [`report`] - Console report and chart datasets

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Streak detection and usage aggregation
pub mod analysis;

/// Record cache with legacy row-format compatibility
pub mod cache;

/// CLI surface and error-to-exit-code mapping
pub mod cli;

/// Account credential loading and persistence
pub mod config;

/// Record extraction from normalized page text
pub mod extract;

/// HTTP page retrieval and pagination
pub mod fetcher;

/// Refetch choice parsing decoupled from console I/O
pub mod prompt;

/// Console report and chart datasets
pub mod report;

/// One successful seat check-in found on a reservation-history page.
///
/// Records carry no identity; duplicates from a re-fetch are kept in the
/// list and collapse only through date-set operations in the analysis stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationRecord {
    /// Full seat identifier, e.g. `LF2-101`
    pub seat_code: String,
    /// Area prefix plus floor designator, e.g. `LF2`
    pub seat_block: String,
    /// Letter prefix naming the area, e.g. `LF`, `F`, `WNF`
    pub area_prefix: String,
    /// Check-in calendar date
    pub date: NaiveDate,
    /// Check-in time of day
    pub time: NaiveTime,
}

impl ReservationRecord {
    /// Validate internal consistency of the derived fields.
    ///
    /// The area prefix and seat block come from nested capture groups of the
    /// same match, so the prefix must lead the block and the block must lead
    /// the seat code.
    pub fn validate(&self) -> Result<(), String> {
        if self.area_prefix.is_empty() {
            return Err("area prefix must not be empty".to_string());
        }

        if !self.seat_block.starts_with(&self.area_prefix) {
            return Err(format!(
                "area prefix {:?} is not a prefix of seat block {:?}",
                self.area_prefix, self.seat_block
            ));
        }

        if !self.seat_code.starts_with(&self.seat_block) {
            return Err(format!(
                "seat block {:?} is not a prefix of seat code {:?}",
                self.seat_block, self.seat_code
            ));
        }

        Ok(())
    }

    /// Month grouping key, `YYYY-MM`.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Year grouping key, `YYYY`.
    pub fn year_key(&self) -> String {
        self.date.format("%Y").to_string()
    }

    /// Two-digit hour grouping key, `HH`.
    pub fn hour_key(&self) -> String {
        format!("{:02}", self.time.hour())
    }

    /// Half-year grouping key: `YYYY-H1` for Jan-Jun, `YYYY-H2` for Jul-Dec.
    pub fn half_year_key(&self) -> String {
        let half = if self.date.month() <= 6 { 1 } else { 2 };
        format!("{}-H{half}", self.date.year())
    }
}

/// Lookup table from area prefix to human-readable library name.
///
/// The table is injected into the grouping stage rather than read from a
/// module-level constant, so new areas can be added without code changes.
/// Resolving an unknown prefix is a deliberate hard failure surfaced by the
/// aggregation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMap {
    entries: BTreeMap<String, String>,
}

impl LibraryMap {
    /// Build a map from `(prefix, library name)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve an area prefix to its library name.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// Library names in the table, in prefix order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

impl Default for LibraryMap {
    /// Every area prefix the origin site is known to emit.
    fn default() -> Self {
        Self::from_entries([
            ("LF", "法图"),
            ("WF", "西馆"),
            ("NF", "北馆"),
            ("F", "文图"),
            ("AF", "美图"),
            ("WNF", "北/西馆连廊"),
        ])
    }
}
