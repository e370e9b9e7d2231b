//! Account credential loading and persistence.
//!
//! Credentials live in a small JSON file next to the cache. A missing or
//! unreadable file is recovered interactively: the user is prompted for the
//! id and token, and the answers are written back so the next run starts
//! silently.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Config errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem read/write failure
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file serialization failure
    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Credentials presented to the origin site as session cookies.
///
/// The token is supplied externally and assumed valid for the session;
/// refreshing it is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// User id (`userid` cookie)
    pub id: String,
    /// Session token (`access_token` cookie)
    pub token: String,
}

impl Account {
    /// Load credentials from a JSON config file.
    ///
    /// Returns `None` when the file is missing or unparseable; the caller
    /// recovers by prompting.
    pub fn load(path: &Path) -> Option<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "account file unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(account) => Some(account),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "account file unparseable");
                None
            }
        }
    }

    /// Read credentials interactively from the given reader/writer pair.
    pub fn prompt_from<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<Self> {
        write!(writer, "Enter user id: ")?;
        writer.flush()?;
        let mut id = String::new();
        reader.read_line(&mut id)?;

        write!(writer, "Enter access token: ")?;
        writer.flush()?;
        let mut token = String::new();
        reader.read_line(&mut token)?;

        Ok(Self {
            id: id.trim().to_string(),
            token: token.trim().to_string(),
        })
    }

    /// Persist credentials as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load credentials, falling back to an interactive prompt on failure.
    ///
    /// Prompted credentials are persisted back to the same path before
    /// returning, so the recovery happens at most once.
    pub fn load_or_prompt(path: &Path) -> Result<Self, ConfigError> {
        if let Some(account) = Self::load(path) {
            return Ok(account);
        }

        println!("Account file missing or unreadable, please re-enter credentials.");
        let stdin = io::stdin();
        let account = Self::prompt_from(stdin.lock(), io::stdout())?;
        account.save(path)?;
        Ok(account)
    }
}
