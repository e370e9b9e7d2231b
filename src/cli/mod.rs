//! CLI surface.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::analysis::aggregate::UsageStats;
use crate::analysis::streak::{self, DEFAULT_MIN_STREAK};
use crate::cache::RecordCache;
use crate::config::Account;
use crate::extract::RecordPattern;
use crate::fetcher::http::{SeatHttpClient, DEFAULT_BASE_URL};
use crate::fetcher::pagination::HistoryFetcher;
use crate::prompt;
use crate::report;
use crate::LibraryMap;

pub mod error;

pub use error::CliError;

/// Fetch library seat check-in history and print usage statistics.
#[derive(Debug, Parser)]
#[command(name = "libseat-stats", version, about)]
pub struct Cli {
    /// Account credential file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Record cache file
    #[arg(long, default_value = "records.json")]
    pub cache: PathBuf,

    /// Origin site serving the reservation history
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Minimum run length for a streak to be reported individually
    #[arg(long, default_value_t = DEFAULT_MIN_STREAK)]
    pub min_streak: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Run the full fetch-analyze-report flow.
///
/// # Errors
/// Returns a [`CliError`] carrying the exit code for every fatal condition:
/// transport failures, a missing page-count marker, and invalid prompt
/// input.
pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let account = Account::load_or_prompt(&cli.config)?;
    let choice = prompt::ask_stdin()?;

    let pattern = RecordPattern::default();
    let client = SeatHttpClient::new(
        cli.base_url.clone(),
        account,
        Duration::from_secs(cli.timeout_secs),
    )?;
    let fetcher = HistoryFetcher::new(&pattern);
    let cache = RecordCache::new(&cli.cache);

    let (records, origin) = cache
        .load_or_fetch(choice.prefer_cache(), &fetcher, &client)
        .await?;
    info!(count = records.len(), ?origin, "record set ready");

    let stats = UsageStats::compute(&records, &LibraryMap::default())?;
    let streaks = streak::analyze(&stats.unique_dates, cli.min_streak);

    report::print_report(&stats, &streaks, cli.min_streak)?;
    Ok(())
}
