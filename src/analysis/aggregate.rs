//! Usage aggregation over the record list.
//!
//! All groupings are plain counts keyed by strings and kept in `BTreeMap`s,
//! so iteration order matches the ascending-key order the report prints.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{LibraryMap, ReservationRecord};

/// Aggregation errors
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// A record's area prefix is not in the library table.
    ///
    /// Every prefix the source emits must be enumerated up front; hitting
    /// this means the site introduced a new area.
    #[error("unknown area prefix {0:?}: extend the library table")]
    UnknownAreaPrefix(String),
}

/// Check-in counts across every grouping dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    /// Total number of check-ins, duplicates included
    pub total: usize,
    /// Check-ins per full seat code
    pub by_seat: BTreeMap<String, usize>,
    /// Check-ins per seat block (area prefix plus floor)
    pub by_block: BTreeMap<String, usize>,
    /// Check-ins per library name
    pub by_library: BTreeMap<String, usize>,
    /// Check-ins per `YYYY-MM` month
    pub by_month: BTreeMap<String, usize>,
    /// Check-ins per two-digit hour of day
    pub by_hour: BTreeMap<String, usize>,
    /// Distinct check-in days per `YYYY-MM` month
    pub check_in_days_by_month: BTreeMap<String, usize>,
    /// Check-ins per half-year bucket per library, both zero-gap
    pub half_year_by_library: BTreeMap<String, BTreeMap<String, usize>>,
    /// Every distinct check-in date; input to the streak analysis
    pub unique_dates: BTreeSet<NaiveDate>,
}

impl UsageStats {
    /// Count every grouping in one pass over the records.
    ///
    /// # Errors
    /// Returns [`AggregateError::UnknownAreaPrefix`] on the first record
    /// whose prefix the injected table does not know; no partial statistics
    /// are produced.
    pub fn compute(
        records: &[ReservationRecord],
        libraries: &LibraryMap,
    ) -> Result<Self, AggregateError> {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            let library = libraries
                .resolve(&record.area_prefix)
                .ok_or_else(|| AggregateError::UnknownAreaPrefix(record.area_prefix.clone()))?;

            *stats.by_seat.entry(record.seat_code.clone()).or_default() += 1;
            *stats.by_block.entry(record.seat_block.clone()).or_default() += 1;
            *stats.by_library.entry(library.to_string()).or_default() += 1;
            *stats.by_month.entry(record.month_key()).or_default() += 1;
            *stats.by_hour.entry(record.hour_key()).or_default() += 1;

            *stats
                .half_year_by_library
                .entry(record.half_year_key())
                .or_default()
                .entry(library.to_string())
                .or_default() += 1;

            stats.unique_dates.insert(record.date);
        }

        for date in &stats.unique_dates {
            let month = date.format("%Y-%m").to_string();
            *stats.check_in_days_by_month.entry(month).or_default() += 1;
        }

        Ok(stats)
    }
}
