//! Flavor Prep - Error taxonomy
//!
//! Every failure surfaces directly to the caller; nothing in the library
//! retries or recovers.

use std::path::PathBuf;

/// Errors produced by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem access failed (missing path, permissions, ...)
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body was not valid JSON
    #[error("Malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The JSON was well-formed but not shaped as expected
    #[error("Schema mismatch: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }

    /// True when the error is a filesystem "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<serde_json::Error> for Error {
    /// Shape errors (missing field, wrong type) are schema errors; anything
    /// the tokenizer rejects is a parse error.
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Error::Schema(err.to_string()),
            _ => Error::Parse(err),
        }
    }
}
