//! Textual scraping of the official page and script.

use regex::Regex;
use std::sync::OnceLock;

/// Characters stripped from both ends of every array token.
const TOKEN_TRIM: &[char] = &[' ', '\n', '\t', '"'];

/// First `src="..."` reference to the game script, resolved against `page_url`.
///
/// Matches any quoted `src` value containing `wordle`, optionally followed by a
/// dot, and later `.js`.
pub fn find_script_url(page: &str, page_url: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"src="([^"]*wordle\.?[^"]*\.js[^"]*)"#).expect("script src regex is valid")
    });
    let src = re.captures(page)?.get(1)?.as_str();
    Some(resolve(src, page_url))
}

fn resolve(src: &str, page_url: &str) -> String {
    match url::Url::parse(page_url).and_then(|base| base.join(src)) {
        Ok(u) => u.to_string(),
        Err(_) => src.to_string(),
    }
}

/// Pattern for a bracketed span with no nested brackets that contains `markers` in order.
fn array_pattern(markers: &[String]) -> Regex {
    let between = r"[^\[\]]*";
    let markers_re = markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join(between);
    Regex::new(&format!(r"\[({between}{markers_re}{between})\]")).expect("escaped markers form a valid regex")
}

/// Words of the first array literal in `script` that contains all `markers` in order.
///
/// The body between the brackets is split on `,` and each token trimmed of
/// spaces, newlines, tabs and double quotes. Returns `None` when no such array exists.
pub fn extract_array(script: &str, markers: &[String]) -> Option<Vec<String>> {
    let caps = array_pattern(markers).captures(script)?;
    let body = caps.get(1)?.as_str();
    Some(
        body.split(',')
            .map(|w| w.trim_matches(TOKEN_TRIM).to_string())
            .collect(),
    )
}
