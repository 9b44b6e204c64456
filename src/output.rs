//! Output formatting for matched directories

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

/// A matched directory in JSON output.
#[derive(Debug, Serialize)]
struct JsonMatch {
    /// Directory containing the target file.
    dir: String,
    /// Full path of the matched file inside that directory.
    file: String,
}

/// Sort matches lexically and split them into unique paths and duplicates.
///
/// A path can be collected more than once when search roots overlap; the
/// duplicates are returned separately so the caller can warn about them.
pub fn dedup_sorted(mut matches: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    matches.sort();
    let mut unique: Vec<PathBuf> = Vec::with_capacity(matches.len());
    let mut duplicates = Vec::new();
    for m in matches {
        if unique.last() == Some(&m) {
            duplicates.push(m);
        } else {
            unique.push(m);
        }
    }
    (unique, duplicates)
}

/// Print one matched directory path per line to stdout.
pub fn print_matches(matches: &[PathBuf]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for m in matches {
        writeln!(out, "{}", m.display())?;
    }
    Ok(())
}

/// Print matches as a pretty-printed JSON array to stdout.
pub fn print_json(matches: &[PathBuf], file_name: &str) -> io::Result<()> {
    let records: Vec<JsonMatch> = matches
        .iter()
        .map(|dir| JsonMatch {
            dir: dir.display().to_string(),
            file: dir.join(file_name).display().to_string(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&records).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Warn on stderr about every duplicate match.
pub fn warn_duplicates(duplicates: &[PathBuf]) {
    for dup in duplicates {
        eprintln!("findfiles: warning: {} already found", dup.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_dedup_sorted_orders_lexically() {
        let (unique, duplicates) = dedup_sorted(paths(&["/a/y", "/a/x"]));
        assert_eq!(unique, paths(&["/a/x", "/a/y"]));
        assert!(duplicates.is_empty());
    }

    #[test]
    fn test_dedup_sorted_reports_duplicates() {
        let (unique, duplicates) = dedup_sorted(paths(&["/a/x", "/a/y", "/a/x"]));
        assert_eq!(unique, paths(&["/a/x", "/a/y"]));
        assert_eq!(duplicates, paths(&["/a/x"]));
    }

    #[test]
    fn test_dedup_sorted_empty() {
        let (unique, duplicates) = dedup_sorted(Vec::new());
        assert!(unique.is_empty());
        assert!(duplicates.is_empty());
    }

    #[test]
    fn test_dedup_sorted_triple_yields_two_duplicates() {
        let (unique, duplicates) = dedup_sorted(paths(&["/a", "/a", "/a"]));
        assert_eq!(unique, paths(&["/a"]));
        assert_eq!(duplicates, paths(&["/a", "/a"]));
    }
}
