//! Incremental answer downloader.
//!
//! Walks the date range in order and requests every date that is today or
//! later, or not cached yet. Each download goes to a temp file and is then
//! reconciled against the cache (see `crate::cache`). A failure on one date is
//! logged and the run moves on.

mod event;
pub mod pacing;

pub use event::{DownloadEvent, DownloadSummary};
pub use pacing::{NoDelay, Pacer, RandomDelay};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::cache::{self, Reconciled};
use crate::calendar::{self, DateRange};
use crate::config::WdlConfig;
use crate::fetch::Fetcher;
use crate::record;

/// Horizon of the legacy plain downloader (tomorrow and the day after).
pub const LEGACY_FUTURE_DAYS: u32 = 2;

/// How a fresh download is committed to an existing cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Compare solutions; keep the cached bytes when unchanged.
    Reconcile,
    /// Overwrite unconditionally.
    Overwrite,
}

/// Which dates to request and where from.
#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub range: DateRange,
    pub today: NaiveDate,
    pub url_template: String,
    pub mode: CommitMode,
}

impl DownloadPlan {
    pub fn from_config(cfg: &WdlConfig, today: NaiveDate) -> Self {
        Self {
            range: DateRange::new(cfg.epoch, today, cfg.future_days),
            today,
            url_template: cfg.answer_url_template.clone(),
            mode: CommitMode::Reconcile,
        }
    }

    /// Plan for `download-words`: short horizon, overwrite in place.
    pub fn legacy(cfg: &WdlConfig, today: NaiveDate) -> Self {
        Self {
            range: DateRange::new(cfg.epoch, today, LEGACY_FUTURE_DAYS),
            today,
            url_template: cfg.answer_url_template.clone(),
            mode: CommitMode::Overwrite,
        }
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        record::expand_url(&self.url_template, date)
    }

    /// Past dates with a cache entry are final and never re-requested.
    pub fn needs_fetch(&self, date: NaiveDate, cached: bool) -> bool {
        date >= self.today || !cached
    }
}

/// Download every date the plan needs into `dir`, reporting progress to `observe`.
pub fn download_answers<F, P, O>(
    fetcher: &F,
    pacer: &mut P,
    dir: &Path,
    plan: &DownloadPlan,
    mut observe: O,
) -> DownloadSummary
where
    F: Fetcher + ?Sized,
    P: Pacer + ?Sized,
    O: FnMut(&DownloadEvent),
{
    let mut summary = DownloadSummary::default();

    for date in plan.range.days() {
        let cached = dir.join(record::record_file_name(date));
        if !plan.needs_fetch(date, cached.is_file()) {
            summary.skipped += 1;
            continue;
        }

        if summary.attempted() > 0 {
            pacer.pause();
        }

        let url = plan.url_for(date);
        observe(&DownloadEvent::Fetching { date });

        let fetched = cache::temp_path(&cached);
        match fetch_one(fetcher, &url, &cached, &fetched, plan.mode) {
            Ok(outcome) => {
                summary.downloaded += 1;
                tracing::debug!("{}: {:?}", calendar::format_date(date), outcome);
                if let Reconciled::Changed { old, new } = outcome {
                    tracing::warn!(
                        "solution changed for {} from '{}' to '{}'",
                        calendar::format_date(date),
                        old.as_deref().unwrap_or("<none>"),
                        new
                    );
                    summary.changed += 1;
                    observe(&DownloadEvent::Changed { date, old, new });
                }
            }
            Err(e) => {
                cache::discard(&fetched);
                tracing::error!("could not download {} to {}: {:#}", url, cached.display(), e);
                summary.failed += 1;
                observe(&DownloadEvent::Failed {
                    date,
                    url,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    tracing::info!(
        "download finished: {} downloaded, {} changed, {} failed, {} skipped",
        summary.downloaded,
        summary.changed,
        summary.failed,
        summary.skipped
    );
    summary
}

fn fetch_one<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    cached: &Path,
    fetched: &Path,
    mode: CommitMode,
) -> Result<Reconciled> {
    fetcher
        .download_file(url, fetched)
        .with_context(|| format!("GET {}", url))?;
    match mode {
        CommitMode::Reconcile => cache::reconcile(cached, fetched),
        CommitMode::Overwrite => cache::replace(cached, fetched),
    }
}
