//! Download task list: one literal meta URL plus one candidate URL per
//! (data file, base URL) pair, in the order they should be tried.

use anyhow::{Context, Result};
use url::Url;

/// One candidate source for a local file. Several tasks may share a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: String,
    pub filename: String,
}

impl DownloadTask {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// Joins `filename` onto `base` with standard URL resolution rules.
///
/// Percent-encoding and path segments of the base are kept; a base without a
/// trailing slash has its last segment replaced.
pub fn join_url(base: &str, filename: &str) -> Result<String> {
    let base = Url::parse(base).with_context(|| format!("invalid base URL: {}", base))?;
    let joined = base
        .join(filename)
        .with_context(|| format!("cannot join {} onto {}", filename, base))?;
    Ok(joined.into())
}

/// Builds the ordered task list: the meta file first, then for each data file
/// (in order) one task per base URL (in order).
pub fn build_tasks(
    meta_url: &str,
    meta_filename: &str,
    base_urls: &[String],
    files: &[String],
) -> Result<Vec<DownloadTask>> {
    Url::parse(meta_url).with_context(|| format!("invalid meta URL: {}", meta_url))?;

    let mut tasks = vec![DownloadTask::new(meta_url, meta_filename)];
    for filename in files.iter().filter(|f| f.as_str() != meta_filename) {
        for base in base_urls {
            tasks.push(DownloadTask::new(join_url(base, filename)?, filename.as_str()));
        }
    }
    Ok(tasks)
}

/// Distinct filenames across `tasks`, in order of first appearance.
pub fn expected_filenames(tasks: &[DownloadTask]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for task in tasks {
        if !out.iter().any(|f| f == &task.filename) {
            out.push(task.filename.clone());
        }
    }
    out
}
