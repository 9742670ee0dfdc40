//! CLI for WDL, the daily answer downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wdl_core::config;
use wdl_core::downloader::pacing;
use wdl_core::fetch::CurlFetcher;

use commands::{run_build_answer_list, run_check_official, run_download_answers, run_download_words};

/// Top-level CLI for WDL.
#[derive(Debug, Parser)]
#[command(name = "wdl", version)]
#[command(about = "WDL: download daily answers, build rollups, check the official word list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download answers from the epoch through the horizon, then write all.json and list.json.
    DownloadAnswers {
        /// Existing directory holding one JSON record per date.
        output_dir: PathBuf,
    },

    /// Build the chronological answer list from already downloaded records.
    BuildAnswerList {
        /// Directory of per-date JSON records.
        source_dir: PathBuf,
        /// File to write the JSON word list to.
        target_file: PathBuf,
    },

    /// Compare a local reference word list with the one embedded in the official game script.
    CheckOfficial {
        /// Reference list: JSON array of strings, or one word per line.
        reference_file: PathBuf,
    },

    /// Plain download of missing and upcoming records, overwriting without comparison.
    DownloadWords {
        /// Existing directory holding one JSON record per date.
        output_dir: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            // --help / --version
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let _ = e.print();
                std::process::exit(1);
            }
        };

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let today = chrono::Local::now().date_naive();
        let fetcher = CurlFetcher::new();

        match cli.command {
            CliCommand::DownloadAnswers { output_dir } => {
                let mut pacer = pacing::from_config(&cfg.pacing());
                run_download_answers(&fetcher, &mut pacer, &cfg, &output_dir, today)?;
            }
            CliCommand::BuildAnswerList {
                source_dir,
                target_file,
            } => run_build_answer_list(&cfg, &source_dir, &target_file, today)?,
            CliCommand::CheckOfficial { reference_file } => {
                run_check_official(&fetcher, &cfg, &reference_file)?
            }
            CliCommand::DownloadWords { output_dir } => {
                let mut pacer = pacing::from_config(&cfg.pacing());
                run_download_words(&fetcher, &mut pacer, &cfg, &output_dir, today)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
