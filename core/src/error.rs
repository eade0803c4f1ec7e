//! Dictionary feed failure taxonomy.
//!
//! Only loading can fail. Segmentation reports unmatched input through its
//! result variants and never raises an error; a feed that is missing,
//! unreadable or structurally damaged always surfaces here, carrying the
//! feed path so the frontend can report it. The core never falls back to an
//! empty dictionary on its own.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure raised while materializing a dictionary feed.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The feed file is missing or unreadable.
    #[error("dictionary feed '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The feed header lacks a column the loader requires.
    #[error("dictionary feed '{}': missing required column '{}'", .path.display(), .column)]
    MissingColumn { path: PathBuf, column: String },

    /// A structurally damaged feed: empty file, short row, and the like.
    /// `line` is 1-based; 0 refers to the feed as a whole.
    #[error("dictionary feed '{}', line {}: {}", .path.display(), .line, .reason)]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A JSON feed failed to parse.
    #[error("dictionary feed '{}': {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataSourceError {
    /// Path of the feed that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataSourceError::Io { path, .. }
            | DataSourceError::MissingColumn { path, .. }
            | DataSourceError::Malformed { path, .. }
            | DataSourceError::Json { path, .. } => path,
        }
    }
}
