//! Local record cache.
//!
//! The full record set is snapshotted to a single JSON file and overwritten
//! wholesale after every live fetch; there are no incremental updates. The
//! on-disk shape is the legacy 7-string row format
//! `[seat_code, seat_block, area_prefix, date, month, year, time]`, so cache
//! files written by the original tool keep loading.
//!
//! The cache is best-effort: a missing or corrupt file is never an error,
//! it just falls through to a live fetch, which is strictly more
//! authoritative.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::fetcher::{FetchResult, PageSource};
use crate::fetcher::pagination::HistoryFetcher;
use crate::ReservationRecord;

/// Legacy on-disk row: the raw capture-group tuple of the original tool.
type CacheRow = (String, String, String, String, String, String, String);

/// Cache errors
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Filesystem read/write failure
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file is not valid JSON in the row format
    #[error("cache parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A row carries a date or time that does not parse
    #[error("malformed cache row: {0}")]
    MalformedRow(String),

    /// Atomic replacement of the cache file failed
    #[error("cache persist error: {0}")]
    Persist(String),
}

/// Where a record set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Loaded verbatim from the on-disk snapshot
    Cache,
    /// Fetched live from the origin site
    Fetched,
}

/// Wholesale JSON snapshot of the full record set.
pub struct RecordCache {
    path: PathBuf,
}

impl RecordCache {
    /// Create a cache handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a readable, parseable cache snapshot exists.
    pub fn is_valid(&self) -> bool {
        self.read_rows().is_ok()
    }

    /// Load the cached record set.
    ///
    /// Returns `None` when the file is missing or unparseable; both cases
    /// are logged and silently fall through to a live fetch at the caller.
    pub fn load(&self) -> Option<Vec<ReservationRecord>> {
        match self.read_rows() {
            Ok(records) => {
                debug!(count = records.len(), path = %self.path.display(), "cache hit");
                Some(records)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cache unusable, will fetch");
                None
            }
        }
    }

    /// Persist the full record set, replacing any previous snapshot.
    ///
    /// The write goes through a temp file in the same directory followed by
    /// an atomic rename, so a crash mid-write never leaves a truncated cache.
    pub fn save(&self, records: &[ReservationRecord]) -> Result<(), CacheError> {
        let rows: Vec<CacheRow> = records.iter().map(to_row).collect();
        let json = serde_json::to_string(&rows)?;

        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|e| CacheError::Persist(e.to_string()))?;

        debug!(count = records.len(), path = %self.path.display(), "cache written");
        Ok(())
    }

    /// Return the record set, from cache when allowed and possible,
    /// otherwise from a live fetch.
    ///
    /// The two paths are explicit: `prefer_cache` plus a valid snapshot
    /// yields [`RecordOrigin::Cache`] without any network access; every
    /// other combination performs a full fetch, persists the result and
    /// yields [`RecordOrigin::Fetched`]. A failed persist is logged but does
    /// not fail the operation, since the in-memory result is already the
    /// freshest available set.
    ///
    /// # Errors
    /// Propagates any [`crate::fetcher::FetchError`] from the live path.
    pub async fn load_or_fetch<S: PageSource>(
        &self,
        prefer_cache: bool,
        fetcher: &HistoryFetcher<'_>,
        source: &S,
    ) -> FetchResult<(Vec<ReservationRecord>, RecordOrigin)> {
        if prefer_cache {
            if let Some(records) = self.load() {
                return Ok((records, RecordOrigin::Cache));
            }
        }

        let records = fetcher.fetch_all(source).await?;
        if let Err(e) = self.save(&records) {
            warn!(error = %e, "failed to persist record cache");
        }
        Ok((records, RecordOrigin::Fetched))
    }

    fn read_rows(&self) -> Result<Vec<ReservationRecord>, CacheError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let rows: Vec<CacheRow> = serde_json::from_str(&raw)?;
        rows.iter().map(from_row).collect()
    }
}

fn to_row(record: &ReservationRecord) -> CacheRow {
    (
        record.seat_code.clone(),
        record.seat_block.clone(),
        record.area_prefix.clone(),
        record.date.format("%Y-%m-%d").to_string(),
        record.month_key(),
        record.year_key(),
        record.time.format("%H:%M:%S").to_string(),
    )
}

fn from_row(row: &CacheRow) -> Result<ReservationRecord, CacheError> {
    let (seat_code, seat_block, area_prefix, date, _month, _year, time) = row;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| CacheError::MalformedRow(format!("date {date:?}: {e}")))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .map_err(|e| CacheError::MalformedRow(format!("time {time:?}: {e}")))?;

    Ok(ReservationRecord {
        seat_code: seat_code.clone(),
        seat_block: seat_block.clone(),
        area_prefix: area_prefix.clone(),
        date,
        time,
    })
}
