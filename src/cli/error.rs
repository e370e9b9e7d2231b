//! CLI error types and exit-code mapping.

use crate::analysis::aggregate::AggregateError;
use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::fetcher::FetchError;
use crate::prompt::PromptError;

/// Process exit code for transport/network failures.
pub const EXIT_TRANSPORT: i32 = 1;

/// Process exit code for a missing page-count marker.
pub const EXIT_PROTOCOL: i32 = 2;

/// Process exit code for invalid interactive input.
pub const EXIT_USAGE: i32 = 3;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Fetch error
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Config error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Cache error
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Aggregation error
    #[error("aggregation error: {0}")]
    Aggregate(#[from] AggregateError),

    /// Prompt error
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Report output error
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Distinct codes let callers tell an aborted fetch (1) from a changed
    /// site layout or stale token (2) from their own bad input (3).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(FetchError::MissingPageMarker) => EXIT_PROTOCOL,
            Self::Prompt(PromptError::Invalid(_)) => EXIT_USAGE,
            _ => EXIT_TRANSPORT,
        }
    }
}
