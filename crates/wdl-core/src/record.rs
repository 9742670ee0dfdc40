//! Daily answer record as served by the upstream endpoint and cached on disk.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::calendar;

/// One cached day. Upstream sends more fields; only these two are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub print_date: String,
    pub solution: String,
}

/// Lenient view used when comparing an old and a fresh download.
#[derive(Debug, Deserialize)]
struct SolutionOnly {
    #[serde(default)]
    solution: Option<String>,
}

/// Cache file name for `date`, e.g. `2021-06-19.json`.
pub fn record_file_name(date: NaiveDate) -> String {
    format!("{}.json", calendar::format_date(date))
}

/// Fill the `{date}` placeholder of a per-date URL template.
pub fn expand_url(template: &str, date: NaiveDate) -> String {
    template.replace("{date}", &calendar::format_date(date))
}

/// True only for names of the form `YYYY-MM-DD.json`.
pub fn is_record_file_name(name: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.json$").expect("record name regex is valid"))
        .is_match(name)
}

pub fn read_record(path: &Path) -> Result<DailyRecord> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse record {}", path.display()))
}

/// The `solution` field of a record file, `None` when the field is absent.
pub fn read_solution(path: &Path) -> Result<Option<String>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let parsed: SolutionOnly =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(parsed.solution)
}
