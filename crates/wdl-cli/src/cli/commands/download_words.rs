//! `wdl download-words <output_dir>` – plain download, no reconciliation or rollups.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use wdl_core::config::WdlConfig;
use wdl_core::downloader::{self, DownloadPlan, Pacer};
use wdl_core::fetch::Fetcher;

use super::{existing_dir, output, print_event};

pub fn run_download_words<F, P>(
    fetcher: &F,
    pacer: &mut P,
    cfg: &WdlConfig,
    output_dir: &Path,
    today: NaiveDate,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    P: Pacer + ?Sized,
{
    let output_dir = existing_dir(output_dir, "output")?;
    println!("Downloading words to {}", output_dir.display());

    let plan = DownloadPlan::legacy(cfg, today);
    let summary = downloader::download_answers(fetcher, pacer, &output_dir, &plan, print_event);
    output("Downloaded", summary.downloaded);
    if summary.failed > 0 {
        output("Failed", summary.failed);
    }
    Ok(())
}
