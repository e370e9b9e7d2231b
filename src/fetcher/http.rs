//! HTTP page client for the seat reservation site.
//!
//! One GET per page with the two session cookies the site expects. There is
//! deliberately no retry or backoff: pages are fetched one at a time as a
//! courtesy to the origin server, and any failure aborts the whole fetch so
//! statistics are never computed over a partial page range.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::debug;

use crate::config::Account;
use crate::fetcher::{FetchError, FetchResult, PageSource};

/// Origin site serving the reservation history.
pub const DEFAULT_BASE_URL: &str = "https://seat.lib.tsinghua.edu.cn";

/// Per-request timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cookie-authenticated HTTP client for reservation-history pages.
pub struct SeatHttpClient {
    client: Client,
    base_url: String,
    account: Account,
}

impl SeatHttpClient {
    /// Create a new page client.
    ///
    /// # Arguments
    /// * `base_url` - Origin site, e.g. [`DEFAULT_BASE_URL`]
    /// * `account` - Credentials presented as session cookies
    /// * `timeout` - Explicit per-request timeout
    ///
    /// # Errors
    /// Returns `FetchError::Client` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        account: Account,
        timeout: Duration,
    ) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            account,
        })
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/user/index/book/status/4/p/{page}", self.base_url)
    }

    fn cookie_header(&self) -> String {
        format!(
            "userid={}; access_token={}",
            self.account.id, self.account.token
        )
    }
}

#[async_trait]
impl PageSource for SeatHttpClient {
    async fn fetch_page(&self, page: u32) -> FetchResult<String> {
        let url = self.page_url(page);
        debug!(page, %url, "fetching history page");

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, self.cookie_header())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Transport {
                page,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
