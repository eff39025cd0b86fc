//! Score file persistence
//!
//! The format is plain text, one unsigned integer per line. Files are always
//! rewritten whole; there is no header and no versioning.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Parse newline-separated scores.
///
/// Blank lines (including a trailing newline) are skipped; surrounding
/// whitespace is ignored.
pub fn parse_scores(text: &str) -> Result<Vec<u64>> {
    let mut scores = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let score = line.parse::<u64>().map_err(|source| Error::MalformedScore {
            line: idx + 1,
            text: line.to_string(),
            source,
        })?;
        scores.push(score);
    }
    Ok(scores)
}

/// Format scores as the file body, one per line with a trailing newline.
pub fn format_scores(scores: &[u64]) -> String {
    let mut out = String::with_capacity(scores.len() * 8);
    for score in scores {
        out.push_str(&score.to_string());
        out.push('\n');
    }
    out
}

/// Read scores from `path`. A missing file is an empty list.
pub fn read_scores(path: &Path) -> Result<Vec<u64>> {
    match fs::read_to_string(path) {
        Ok(text) => parse_scores(&text),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(Error::ScoreIo {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Overwrite `path` with `scores`.
pub fn write_scores(path: &Path, scores: &[u64]) -> Result<()> {
    fs::write(path, format_scores(scores)).map_err(|source| Error::ScoreIo {
        path: path.to_path_buf(),
        source,
    })
}
