//! Cache directory lifecycle for per-date record files.
//!
//! Every download lands in a temp file next to its cache entry (`.json.new`).
//! The temp file is then either renamed over the entry or deleted, so a failed
//! or unchanged download never touches the cached bytes.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::record;

/// Suffix appended to a cache path while its download is in flight.
pub const TEMP_SUFFIX: &str = ".new";

/// Path for the temp file: appends `.new` (e.g. `2022-01-01.json` → `2022-01-01.json.new`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// What happened to a cache entry after committing a fresh download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// No entry existed; the download became the entry.
    Created,
    /// Same solution as the entry; the download was discarded.
    Unchanged,
    /// The solution differs; the download replaced the entry.
    Changed { old: Option<String>, new: String },
    /// Entry overwritten without comparison.
    Replaced,
}

/// Compare the fresh download at `fetched` with the entry at `cached` and commit or discard it.
///
/// The download must parse as a daily record; otherwise an error is returned and
/// nothing is renamed. An unreadable old entry counts as having no solution.
pub fn reconcile(cached: &Path, fetched: &Path) -> Result<Reconciled> {
    let new = record::read_record(fetched)?.solution;

    if !cached.is_file() {
        commit(fetched, cached)?;
        return Ok(Reconciled::Created);
    }

    let old = record::read_solution(cached).unwrap_or_else(|e| {
        tracing::warn!("unreadable cache entry {}: {:#}", cached.display(), e);
        None
    });

    if old.as_deref() == Some(new.as_str()) {
        fs::remove_file(fetched).with_context(|| format!("remove {}", fetched.display()))?;
        return Ok(Reconciled::Unchanged);
    }

    commit(fetched, cached)?;
    Ok(Reconciled::Changed { old, new })
}

/// Rename the download over the entry without comparing (legacy overwrite mode).
///
/// The download must still parse as a daily record.
pub fn replace(cached: &Path, fetched: &Path) -> Result<Reconciled> {
    record::read_record(fetched)?;
    let existed = cached.is_file();
    commit(fetched, cached)?;
    Ok(if existed {
        Reconciled::Replaced
    } else {
        Reconciled::Created
    })
}

/// Best-effort removal of a leftover temp file.
pub fn discard(fetched: &Path) {
    if fetched.exists() {
        if let Err(e) = fs::remove_file(fetched) {
            tracing::warn!("could not remove {}: {}", fetched.display(), e);
        }
    }
}

fn commit(fetched: &Path, cached: &Path) -> Result<()> {
    fs::rename(fetched, cached)
        .with_context(|| format!("rename {} -> {}", fetched.display(), cached.display()))
}
