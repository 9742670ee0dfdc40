//! `wdl check-official <reference_file>` – diff the local list against the official script.

use anyhow::Result;
use std::path::Path;
use wdl_core::config::WdlConfig;
use wdl_core::fetch::Fetcher;
use wdl_core::official::{self, VALID_LIST};

pub fn run_check_official<F: Fetcher + ?Sized>(
    fetcher: &F,
    cfg: &WdlConfig,
    reference_file: &Path,
) -> Result<()> {
    let reference = official::load_reference(reference_file)?;
    let report = official::check_official(fetcher, cfg, &reference)?;

    let lines = report.diff.report(VALID_LIST);
    if lines.is_empty() {
        println!(
            "[{}] no changes ({} words in {})",
            VALID_LIST, report.official_len, report.script_url
        );
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
