//! Integration test: local HTTP server, real curl fetcher, cache directory on disk.
//!
//! Downloads a small date range, re-runs against unchanged and changed
//! upstream answers, and checks the rollup files written afterwards.

mod common;

use chrono::NaiveDate;
use std::fs;
use wdl_core::cache;
use wdl_core::calendar::DateRange;
use wdl_core::config::WdlConfig;
use wdl_core::downloader::{self, DownloadEvent, DownloadPlan, NoDelay};
use wdl_core::fetch::{CurlFetcher, Fetcher};
use wdl_core::official;
use wdl_core::rollup;
use tempfile::tempdir;

fn d(s: &str) -> NaiveDate {
    wdl_core::calendar::parse_date(s).unwrap()
}

fn record(date: &str, solution: &str) -> String {
    format!(r#"{{"id":7,"print_date":"{date}","solution":"{solution}","editor":"Test"}}"#)
}

fn config(base: &str) -> WdlConfig {
    WdlConfig {
        epoch: d("2022-01-01"),
        future_days: 1,
        answer_url_template: format!("{}/svc/{{date}}.json", base),
        official_page_url: format!("{}/games/wordle/index.html", base),
        ..WdlConfig::default()
    }
}

#[test]
fn download_reconcile_and_rollup() {
    let (base, routes) = common::json_server::start();
    routes.set("/svc/2022-01-01.json", record("2022-01-01", "rebus"));
    routes.set("/svc/2022-01-03.json", record("2022-01-03", "truss"));
    // 2022-01-02 is not served yet.

    let cfg = config(&base);
    let today = d("2022-01-02");
    let dir = tempdir().unwrap();
    let fetcher = CurlFetcher::new();
    let plan = DownloadPlan::from_config(&cfg, today);

    let summary = downloader::download_answers(&fetcher, &mut NoDelay, dir.path(), &plan, |_| {});
    assert_eq!(summary.downloaded, 2);
    assert_eq!(summary.failed, 1);
    assert!(!dir.path().join("2022-01-02.json").exists());
    assert!(!dir.path().join("2022-01-02.json.new").exists());

    // Second run: upstream now serves 01-02, and 01-03 is unchanged.
    routes.set("/svc/2022-01-02.json", record("2022-01-02", "boost"));
    let before = fs::read(dir.path().join("2022-01-03.json")).unwrap();
    let summary = downloader::download_answers(&fetcher, &mut NoDelay, dir.path(), &plan, |_| {});
    assert_eq!(summary.skipped, 1, "past cached date is final");
    assert_eq!(summary.downloaded, 2);
    assert_eq!(summary.changed, 0);
    assert_eq!(fs::read(dir.path().join("2022-01-03.json")).unwrap(), before);

    // Third run: the future answer changes upstream.
    routes.set("/svc/2022-01-03.json", record("2022-01-03", "cigar"));
    let mut events = Vec::new();
    let summary =
        downloader::download_answers(&fetcher, &mut NoDelay, dir.path(), &plan, |e| events.push(e.clone()));
    assert_eq!(summary.changed, 1);
    assert!(events.contains(&DownloadEvent::Changed {
        date: d("2022-01-03"),
        old: Some("truss".to_string()),
        new: "cigar".to_string(),
    }));
    assert!(!cache::temp_path(&dir.path().join("2022-01-03.json")).exists());

    let answers = rollup::read_answers(dir.path()).unwrap();
    rollup::write_all_file(dir.path(), &answers).unwrap();
    let range = DateRange::new(cfg.epoch, d("2022-01-03"), cfg.future_days);
    let list = rollup::build_list(&answers, &range, &cfg.sentinel);
    rollup::write_list_file(&dir.path().join(rollup::LIST_FILE), &list).unwrap();

    let all: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(rollup::ALL_FILE)).unwrap()).unwrap();
    assert_eq!(
        all,
        serde_json::json!({"2022-01-01":"rebus","2022-01-02":"boost","2022-01-03":"cigar"})
    );
    let words: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join(rollup::LIST_FILE)).unwrap()).unwrap();
    assert_eq!(words, vec!["rebus", "boost", "cigar", "absen"]);
    assert_eq!(words.len(), range.len());
}

#[test]
fn curl_fetcher_reports_http_status() {
    let (base, routes) = common::json_server::start();
    routes.set("/ok.json", "[1,2,3]");
    let fetcher = CurlFetcher::new();

    assert_eq!(fetcher.get_text(&format!("{}/ok.json", base)).unwrap(), "[1,2,3]");
    let err = fetcher.get_text(&format!("{}/missing.json", base)).unwrap_err();
    assert_eq!(err.status(), Some(404));

    let dir = tempdir().unwrap();
    let path = dir.path().join("ok.json");
    let n = fetcher.download_file(&format!("{}/ok.json", base), &path).unwrap();
    assert_eq!(n, 7);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2,3]");
}

#[test]
fn check_official_against_local_server() {
    let (base, routes) = common::json_server::start();
    routes.set(
        "/games/wordle/index.html",
        r#"<html><head><script src="/games-assets/wordle.abc123.js"></script></head></html>"#,
    );
    routes.set(
        "/games-assets/wordle.abc123.js",
        r#"!function(){var Ma=["cigar","rebut"],Oa=["aahed","arval","kaugh","tolar","zonal"];}();"#,
    );
    let cfg = config(&base);
    let reference: Vec<String> = ["aahed", "arval", "kaugh", "tolar", "zowie"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let report = official::check_official(&CurlFetcher::new(), &cfg, &reference).unwrap();
    assert_eq!(report.official_len, 5);
    assert_eq!(
        report.diff.report(official::VALID_LIST),
        vec![
            "[valid] removed words: zowie".to_string(),
            "[valid] added words: zonal".to_string(),
        ]
    );
}
