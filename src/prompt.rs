//! Refetch prompt.
//!
//! The answer is parsed by a strict enumerated-choice parser decoupled from
//! console I/O, so the validation rule (`y`/`n` only, anything else is a
//! usage error) is unit-testable without simulating standard input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Answer to the "refetch from source?" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchChoice {
    /// Fetch fresh data from the origin site
    Refetch,
    /// Reuse the local cache when possible
    UseCache,
}

impl RefetchChoice {
    /// Whether the cache should be preferred over a live fetch.
    pub fn prefer_cache(self) -> bool {
        matches!(self, Self::UseCache)
    }
}

/// The answer was neither `y` nor `n`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid choice {input:?}: expected y or n")]
pub struct InvalidChoice {
    /// Raw rejected input
    pub input: String,
}

impl FromStr for RefetchChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" => Ok(Self::Refetch),
            "n" => Ok(Self::UseCache),
            other => Err(InvalidChoice {
                input: other.to_string(),
            }),
        }
    }
}

/// Prompt errors
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Console read/write failure
    #[error("prompt I/O error: {0}")]
    Io(#[from] io::Error),

    /// The answer did not parse; a usage error at the CLI surface
    #[error(transparent)]
    Invalid(#[from] InvalidChoice),
}

/// Ask the refetch question on the given reader/writer pair.
pub fn ask<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<RefetchChoice, PromptError> {
    write!(writer, "Refetch records from the library system? [y/n] ")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.parse()?)
}

/// Ask the refetch question on standard input/output.
pub fn ask_stdin() -> Result<RefetchChoice, PromptError> {
    ask(io::stdin().lock(), io::stdout())
}
