//! Official word-list diff checker.
//!
//! Fetches the game page, follows its script reference, pulls the word array
//! out of the script by marker substrings and diffs it against a local list.
//! This is textual scraping of a third-party bundle; when the markers stop
//! matching the check fails with `ArrayNotFound` rather than passing.

mod diff;
mod extract;
mod reference;

pub use diff::WordDiff;
pub use extract::{extract_array, find_script_url};
pub use reference::load_reference;

use thiserror::Error;

use crate::config::WdlConfig;
use crate::fetch::{FetchError, Fetcher};

/// Name used in report lines for the valid-guess list.
pub const VALID_LIST: &str = "valid";

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("could not find the game script on {page_url}")]
    ScriptNotFound { page_url: String },
    #[error("could not find a word array containing [{}] in {script_url}", .markers.join(", "))]
    ArrayNotFound {
        script_url: String,
        markers: Vec<String>,
    },
}

/// Result of a successful check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub script_url: String,
    pub official_len: usize,
    pub diff: WordDiff,
}

/// Compare `reference` against the word array of the official script.
pub fn check_official<F: Fetcher + ?Sized>(
    fetcher: &F,
    cfg: &WdlConfig,
    reference: &[String],
) -> Result<CheckReport, CheckError> {
    let page_url = cfg.official_page_url.as_str();
    let page = get(fetcher, page_url)?;

    let script_url =
        find_script_url(&page, page_url).ok_or_else(|| CheckError::ScriptNotFound {
            page_url: page_url.to_string(),
        })?;
    tracing::info!("official script: {}", script_url);
    let script = get(fetcher, &script_url)?;

    let official = extract_array(&script, &cfg.script_markers)
        .filter(|words| !words.is_empty())
        .ok_or_else(|| CheckError::ArrayNotFound {
            script_url: script_url.clone(),
            markers: cfg.script_markers.clone(),
        })?;

    let diff = WordDiff::compare(reference.iter().cloned(), official.iter().cloned());
    tracing::info!(
        "official list has {} words; {} removed, {} added",
        official.len(),
        diff.removed.len(),
        diff.added.len()
    );
    Ok(CheckReport {
        script_url,
        official_len: official.len(),
        diff,
    })
}

fn get<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> Result<String, CheckError> {
    fetcher.get_text(url).map_err(|source| CheckError::Fetch {
        url: url.to_string(),
        source,
    })
}
