//! Progress reporting for a download run.

use chrono::NaiveDate;

/// Emitted by `download_answers` so callers can print progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
    /// A request for `date` is about to be sent.
    Fetching { date: NaiveDate },
    /// The upstream solution for an already cached date changed.
    Changed {
        date: NaiveDate,
        old: Option<String>,
        new: String,
    },
    /// The request or the cache update for `date` failed; the run continues.
    Failed {
        date: NaiveDate,
        url: String,
        error: String,
    },
}

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Past dates already cached, not requested.
    pub skipped: usize,
    /// Requests that completed and were committed or discarded.
    pub downloaded: usize,
    /// Cached entries whose solution changed upstream.
    pub changed: usize,
    /// Requests that failed.
    pub failed: usize,
}

impl DownloadSummary {
    /// Number of requests sent.
    pub fn attempted(&self) -> usize {
        self.downloaded + self.failed
    }
}
