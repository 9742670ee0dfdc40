//! Rollup files built from the cache directory.
//!
//! `all.json` maps each cached `print_date` to its solution. `list.json` holds
//! one word per day of the date range, with the sentinel filling the gaps.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::calendar::{self, DateRange};
use crate::record;

/// File name of the date → word map.
pub const ALL_FILE: &str = "all.json";
/// File name of the chronological word list.
pub const LIST_FILE: &str = "list.json";

/// Date string → solution, sorted by date.
pub type AnswerMap = BTreeMap<String, String>;

/// Chronological list for a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerList {
    /// One word per day, in order.
    pub words: Vec<String>,
    /// Days that got the sentinel.
    pub missing: Vec<String>,
}

/// Read every `YYYY-MM-DD.json` record in `dir`, keyed by its `print_date`.
pub fn read_answers(dir: &Path) -> Result<AnswerMap> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut answers = AnswerMap::new();
    let entries = fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read dir {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_record = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, record::is_record_file_name);
        if !is_record {
            continue;
        }

        let rec = record::read_record(&path)?;
        answers.insert(rec.print_date, rec.solution);
    }
    tracing::debug!("read {} answers from {}", answers.len(), dir.display());
    Ok(answers)
}

/// One word per day of `range`; days without an answer get `sentinel`.
pub fn build_list(answers: &AnswerMap, range: &DateRange, sentinel: &str) -> AnswerList {
    let mut words = Vec::with_capacity(range.len());
    let mut missing = Vec::new();
    for day in range.days() {
        let key = calendar::format_date(day);
        match answers.get(&key) {
            Some(word) => words.push(word.clone()),
            None => {
                tracing::warn!("no answer found for {}", key);
                words.push(sentinel.to_string());
                missing.push(key);
            }
        }
    }
    AnswerList { words, missing }
}

/// Write `all.json` into `dir`, replacing any previous version. Returns the path written.
pub fn write_all_file(dir: &Path, answers: &AnswerMap) -> Result<std::path::PathBuf> {
    let path = dir.join(ALL_FILE);
    write_json(&path, answers)?;
    Ok(path)
}

/// Write the word list to `path`, replacing any previous version.
pub fn write_list_file(path: &Path, list: &AnswerList) -> Result<()> {
    write_json(path, &list.words)
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("serialize rollup")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
