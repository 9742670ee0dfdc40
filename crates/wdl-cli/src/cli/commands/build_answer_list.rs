//! `wdl build-answer-list <source_dir> <target_file>` – list rollup from cached records.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use wdl_core::calendar::DateRange;
use wdl_core::config::WdlConfig;
use wdl_core::rollup;

use super::{existing_dir, output, print_missing};

pub fn run_build_answer_list(
    cfg: &WdlConfig,
    source_dir: &Path,
    target_file: &Path,
    today: NaiveDate,
) -> Result<()> {
    let source_dir = existing_dir(source_dir, "source")?;
    output("Source", source_dir.display());
    output("Target", target_file.display());

    let answers = rollup::read_answers(&source_dir)?;
    let range = DateRange::new(cfg.epoch, today, cfg.future_days);
    let list = rollup::build_list(&answers, &range, &cfg.sentinel);
    print_missing(&list.missing);

    rollup::write_list_file(target_file, &list)?;
    output("Answers", list.words.len());
    Ok(())
}
