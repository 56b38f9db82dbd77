#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// A glob utility function to find files directly inside `root_dir` whose
/// extension is one of `extensions` (compared case-insensitively).
///
/// Results come back in glob order, i.e. sorted by path.
///
/// * `extensions`: file extensions to keep, without the leading dot
/// * `root_dir`: the folder to scan (not recursed into)
pub fn find_files(extensions: &[String], root_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = root_dir.join("*");
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .filter(|p| p.is_file() && has_extension(p, extensions))
        .collect())
}

/// Whether `path` ends in one of `extensions`, ignoring case.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Population standard deviation (divides by `n`), `None` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
