//! Fetch error type.

use std::io;
use thiserror::Error;

/// Error returned by a single GET (curl failure, HTTP error, or local file failure).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection, TLS, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Creating or writing the destination file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        FetchError::Io {
            context: context.into(),
            source,
        }
    }

    /// HTTP status code, if the server answered with a non-2xx status.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { code, .. } => Some(*code),
            FetchError::Curl(_) | FetchError::Io { .. } => None,
        }
    }
}
