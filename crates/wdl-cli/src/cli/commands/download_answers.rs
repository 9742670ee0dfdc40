//! `wdl download-answers <output_dir>` – refresh the cache and write both rollups.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use wdl_core::config::WdlConfig;
use wdl_core::downloader::{self, DownloadPlan, Pacer};
use wdl_core::fetch::Fetcher;
use wdl_core::rollup;

use super::{existing_dir, output, print_event, print_missing, print_range};

pub fn run_download_answers<F, P>(
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
    output("Output", output_dir.display());

    let plan = DownloadPlan::from_config(cfg, today);
    print_range(&plan.range);

    let summary = downloader::download_answers(fetcher, pacer, &output_dir, &plan, print_event);
    output("Downloaded", summary.downloaded);
    if summary.failed > 0 {
        output("Failed", summary.failed);
    }

    let answers = rollup::read_answers(&output_dir)?;
    rollup::write_all_file(&output_dir, &answers)?;
    output(rollup::ALL_FILE, answers.len());

    let list = rollup::build_list(&answers, &plan.range, &cfg.sentinel);
    print_missing(&list.missing);
    rollup::write_list_file(&output_dir.join(rollup::LIST_FILE), &list)?;
    output(rollup::LIST_FILE, list.words.len());

    Ok(())
}
