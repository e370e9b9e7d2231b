//! Reservation-history fetching.
//!
//! The production path issues cookie-authenticated GET requests through
//! [`http::SeatHttpClient`]; [`pagination::HistoryFetcher`] drives the page
//! loop over any [`PageSource`], which keeps the whole protocol testable
//! without a network.

use async_trait::async_trait;

pub mod http;
pub mod pagination;

/// Fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status on a page fetch; aborts the whole operation
    #[error("transport error: page {page} returned HTTP {status}")]
    Transport {
        /// Page index that failed
        page: u32,
        /// HTTP status code returned
        status: u16,
    },

    /// Connection-level failure (timeout, refused, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// HTTP client construction failure
    #[error("http client error: {0}")]
    Client(String),

    /// Final-page marker missing from page 1
    #[error("page-count marker not found: site layout changed or token invalid")]
    MissingPageMarker,

    /// Announced page count exceeds the safety cap
    #[error("announced page count {count} exceeds safety cap {cap}")]
    PageCountExceeded {
        /// Page count announced by the marker
        count: u32,
        /// Configured safety cap
        cap: u32,
    },
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// One page of the reservation history, addressed by 1-based index.
///
/// The production implementation performs HTTP; tests substitute canned
/// page bodies.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw body of the given page.
    ///
    /// # Errors
    /// Any transport or network failure is fatal to the surrounding fetch;
    /// there is no retry.
    async fn fetch_page(&self, page: u32) -> FetchResult<String>;
}
