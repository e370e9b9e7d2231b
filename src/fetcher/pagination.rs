//! Pagination over the reservation history.
//!
//! Page 1 yields both the first batch of records and the total page count;
//! the remaining pages are fetched strictly sequentially, one outstanding
//! request at a time, with records appended in page order. Intra-page
//! document order is preserved and the concatenation is not sorted further,
//! so the overall order is not guaranteed to be chronological.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::extract::{find_page_count, normalize_page, RecordPattern};
use crate::fetcher::{FetchError, FetchResult, PageSource};
use crate::ReservationRecord;

/// Upper bound on the announced page count.
///
/// Guards against a malformed final-page link announcing an absurd count;
/// real histories span at most a few hundred pages.
pub const MAX_PAGES: u32 = 10_000;

/// Drives record retrieval across all pages of a reservation history.
pub struct HistoryFetcher<'a> {
    pattern: &'a RecordPattern,
}

impl<'a> HistoryFetcher<'a> {
    /// Create a fetcher extracting records with the given pattern.
    pub fn new(pattern: &'a RecordPattern) -> Self {
        Self { pattern }
    }

    /// Fetch and extract every record across all pages.
    ///
    /// # Errors
    /// * `FetchError::Transport` / `FetchError::Network` - any page fetch
    ///   failed; no partial result is returned
    /// * `FetchError::MissingPageMarker` - page 1 carries no final-page link
    /// * `FetchError::PageCountExceeded` - the marker announced more than
    ///   [`MAX_PAGES`] pages
    pub async fn fetch_all<S: PageSource>(
        &self,
        source: &S,
    ) -> FetchResult<Vec<ReservationRecord>> {
        let first = source.fetch_page(1).await?;
        let first = normalize_page(&first);

        let mut records = self.pattern.extract(&first);
        debug!(count = records.len(), "extracted records from page 1");

        let page_count = find_page_count(&first).ok_or(FetchError::MissingPageMarker)?;
        if page_count > MAX_PAGES {
            return Err(FetchError::PageCountExceeded {
                count: page_count,
                cap: MAX_PAGES,
            });
        }
        info!(page_count, "reservation history located");

        let bar = ProgressBar::new(u64::from(page_count.saturating_sub(1)));
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} pages {msg}")
        {
            bar.set_style(style);
        }

        for page in 2..=page_count {
            let body = source.fetch_page(page).await?;
            let page_records = self.pattern.extract(&normalize_page(&body));
            debug!(page, count = page_records.len(), "extracted records");
            records.extend(page_records);
            bar.inc(1);
        }
        bar.finish_and_clear();

        info!(total = records.len(), "fetch complete");
        Ok(records)
    }
}
