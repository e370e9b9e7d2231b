//! Shared fixtures: canned page bodies and a network-free page source.

use std::sync::Mutex;

use async_trait::async_trait;
use libseat_stats::fetcher::{FetchError, FetchResult, PageSource};

/// One canned page of the simulated history.
pub enum MockPage {
    /// Page resolves with this raw body
    Body(String),
    /// Page resolves with this non-success HTTP status
    Status(u16),
}

/// Page source serving canned pages and logging every fetch.
pub struct MockSource {
    pages: Vec<MockPage>,
    calls: Mutex<Vec<u32>>,
}

impl MockSource {
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Pages fetched so far, in request order.
    pub fn call_log(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch_page(&self, page: u32) -> FetchResult<String> {
        self.calls.lock().unwrap().push(page);
        match self.pages.get(page as usize - 1) {
            Some(MockPage::Body(body)) => Ok(body.clone()),
            Some(MockPage::Status(status)) => Err(FetchError::Transport {
                page,
                status: *status,
            }),
            None => Err(FetchError::Network(format!("no fixture for page {page}"))),
        }
    }
}

/// Raw history page with one table row per `(seat, "date time")` pair and an
/// optional final-page link announcing the total page count.
pub fn history_page(seats: &[(&str, &str)], page_count: Option<u32>) -> String {
    let mut body = String::from("<html>\n<body>\n<table>\n");
    for (seat, stamp) in seats {
        body.push_str(&format!(
            "  <tr><td>{seat}</td><td>{stamp}</td><td>signed in</td></tr>\n"
        ));
    }
    body.push_str("</table>\n");
    if let Some(count) = page_count {
        body.push_str(&format!(
            "<li class=\"end\" href=\"/user/index/book/status/4/p/{count}\">&gt;&gt;</li>\n"
        ));
    }
    body.push_str("</body>\n</html>\n");
    body
}
