use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Politeness delay between sequential requests (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// When false, requests are issued back to back.
    pub enabled: bool,
    /// Upper bound (exclusive) of the uniform random delay, in seconds.
    pub max_delay_secs: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_delay_secs: 3.0,
        }
    }
}

/// Global configuration loaded from `~/.config/wdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WdlConfig {
    /// First day of the daily sequence.
    pub epoch: NaiveDate,
    /// How many days past today to request and list.
    pub future_days: u32,
    /// Placeholder word for days without a cached record.
    pub sentinel: String,
    /// Per-date endpoint; `{date}` is replaced with `YYYY-MM-DD`.
    pub answer_url_template: String,
    /// Page that references the official game script.
    pub official_page_url: String,
    /// Substrings that must appear, in order, inside the word array of the script.
    pub script_markers: Vec<String>,
    /// Optional pacing section; if missing, built-in defaults are used.
    #[serde(default)]
    pub pacing: Option<PacingConfig>,
}

impl Default for WdlConfig {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or_default(),
            future_days: 14,
            sentinel: "absen".to_string(),
            answer_url_template: "https://www.nytimes.com/svc/wordle/v2/{date}.json".to_string(),
            official_page_url: "https://www.nytimes.com/games/wordle/index.html".to_string(),
            script_markers: vec!["arval".into(), "kaugh".into(), "tolar".into()],
            pacing: None,
        }
    }
}

impl WdlConfig {
    /// Pacing settings, falling back to defaults when the section is absent.
    pub fn pacing(&self) -> PacingConfig {
        self.pacing.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
