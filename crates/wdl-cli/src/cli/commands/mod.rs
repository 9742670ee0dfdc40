//! CLI command handlers, one file per subcommand.

mod build_answer_list;
mod check_official;
mod download_answers;
mod download_words;

#[cfg(test)]
mod test_support;

pub use build_answer_list::run_build_answer_list;
pub use check_official::run_check_official;
pub use download_answers::run_download_answers;
pub use download_words::run_download_words;

use anyhow::{Context, Result};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use wdl_core::calendar::{self, DateRange};
use wdl_core::downloader::DownloadEvent;

/// Print a `prefix:` column padded to 12 characters followed by `msg`.
pub(crate) fn output(prefix: &str, msg: impl Display) {
    println!("{}", format_line(prefix, msg));
}

pub(crate) fn format_line(prefix: &str, msg: impl Display) -> String {
    let prefix = if prefix.ends_with(':') {
        prefix.to_string()
    } else {
        format!("{}:", prefix)
    };
    format!("{:<12} {}", prefix, msg)
}

/// Absolute path of an existing directory; `role` names it in the error.
pub(crate) fn existing_dir(path: &Path, role: &str) -> Result<PathBuf> {
    if !path.is_dir() {
        anyhow::bail!("{} directory does not exist: {}", role, path.display());
    }
    path.canonicalize()
        .with_context(|| format!("resolve {}", path.display()))
}

pub(crate) fn print_range(range: &DateRange) {
    if let (Some(first), Some(last)) = (range.first(), range.last()) {
        output("Start", calendar::format_date(first));
        output("End", calendar::format_date(last));
    }
    output("Answers", range.len());
}

pub(crate) fn print_event(event: &DownloadEvent) {
    match event {
        DownloadEvent::Fetching { date } => output("Download", calendar::format_date(*date)),
        DownloadEvent::Changed { date, old, new } => println!(
            "WARNING: solution changed for {} from '{}' to '{}'",
            calendar::format_date(*date),
            old.as_deref().unwrap_or("<none>"),
            new
        ),
        DownloadEvent::Failed { url, error, .. } => {
            println!("ERROR: Could not download {}: {}", url, error)
        }
    }
}

pub(crate) fn print_missing(missing: &[String]) {
    for date in missing {
        println!("WARNING: No answer found for {}", date);
    }
}
