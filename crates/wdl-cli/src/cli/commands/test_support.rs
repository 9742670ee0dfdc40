//! Canned-response fetcher shared by the handler tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use wdl_core::fetch::{FetchError, Fetcher};

pub const TEMPLATE: &str = "https://answers.test/{date}.json";

/// Serves bodies by URL with 200; unknown URLs answer 404.
#[derive(Default)]
pub struct FakeFetcher(HashMap<String, String>);

impl FakeFetcher {
    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.0.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_answer(self, date: &str, solution: &str) -> Self {
        let body = format!(r#"{{"print_date":"{date}","solution":"{solution}"}}"#);
        self.with_body(&TEMPLATE.replace("{date}", date), &body)
    }
}

impl Fetcher for FakeFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.0.get(url).cloned().ok_or(FetchError::Http {
            url: url.to_string(),
            code: 404,
        })
    }

    fn download_file(&self, url: &str, path: &Path) -> Result<u64, FetchError> {
        let body = self.get_text(url)?;
        fs::write(path, &body).map_err(|e| FetchError::Io {
            context: format!("write {}", path.display()),
            source: e,
        })?;
        Ok(body.len() as u64)
    }
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
