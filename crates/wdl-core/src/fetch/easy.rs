//! libcurl-backed fetcher.

use super::{FetchError, Fetcher};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Blocking fetcher using one `curl::easy::Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        Ok(easy)
    }
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<(), FetchError> {
    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }
    Ok(())
}

impl Fetcher for CurlFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let mut body = Vec::new();
        let mut easy = self.easy(url)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        check_status(&mut easy, url)?;
        tracing::debug!("GET {} -> {} bytes", url, body.len());
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn download_file(&self, url: &str, path: &Path) -> Result<u64, FetchError> {
        let file = File::create(path)
            .map_err(|e| FetchError::io(format!("create {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        let mut written = 0u64;
        let mut write_err = None;

        let mut easy = self.easy(url)?;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match writer.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_err {
            return Err(FetchError::io(format!("write {}", path.display()), e));
        }
        performed?;
        writer
            .flush()
            .map_err(|e| FetchError::io(format!("flush {}", path.display()), e))?;
        check_status(&mut easy, url)?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, path.display(), written);
        Ok(written)
    }
}
