pub mod config;
pub mod logging;

pub mod cache;
pub mod calendar;
pub mod downloader;
pub mod fetch;
pub mod official;
pub mod record;
pub mod rollup;
