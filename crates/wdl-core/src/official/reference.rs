//! Local reference word list.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a reference list: a JSON array of strings, or one word per line
/// (blank lines and `#` comments ignored).
pub fn load_reference(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read reference list {}", path.display()))?;
    parse_reference(&data).with_context(|| format!("parse reference list {}", path.display()))
}

fn parse_reference(data: &str) -> Result<Vec<String>> {
    if data.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(data)?;
        return Ok(words);
    }
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array() {
        assert_eq!(
            parse_reference(r#" ["aahed", "aalii"]"#).unwrap(),
            vec!["aahed", "aalii"]
        );
        assert!(parse_reference(r#"["aahed", 3]"#).is_err());
    }

    #[test]
    fn plain_lines() {
        let data = "# valid guesses\naahed\n\n  aalii \n";
        assert_eq!(parse_reference(data).unwrap(), vec!["aahed", "aalii"]);
    }

    #[test]
    fn missing_file_errs() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_reference(&dir.path().join("words.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("words.txt"));
    }
}
