//! HTTP GET helper.
//!
//! Uses the curl crate (libcurl) to fetch a URL either into memory as text or
//! streamed into a file. Any non-2xx status is an error.

mod easy;
mod error;

pub use easy::CurlFetcher;
pub use error::FetchError;

use std::path::Path;

/// Source of remote content. `CurlFetcher` in production; tests substitute fakes.
pub trait Fetcher {
    /// GET `url` and return the body as text (invalid UTF-8 is replaced).
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// GET `url` and stream the body into `path`, creating or truncating it.
    /// Returns the number of bytes written. On error the file may hold a partial or error body.
    fn download_file(&self, url: &str, path: &Path) -> Result<u64, FetchError>;
}
