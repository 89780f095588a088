//! Fetcher: make sure one task's file exists under the output directory.
//!
//! `ensure_local` never returns an error. Every fault (non-200 status,
//! timeout, connection or disk error) becomes `FetchOutcome::Failed`, and
//! there are no retries.

mod error;
mod get;

pub use error::FetchError;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::task::DownloadTask;

/// Transfer parameters shared by every request of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Connect timeout, and the longest the body may stall before aborting.
    pub timeout: Duration,
    /// Receive buffer size; bytes reach the file in chunks of at most this size.
    pub chunk_size: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            chunk_size: 8192,
        }
    }
}

/// Result of `Fetcher::ensure_local`.
#[derive(Debug)]
pub enum FetchOutcome {
    /// File was already on disk; no request was made.
    Exists,
    /// File was downloaded (and overwritten if present).
    Downloaded { bytes: u64 },
    Failed(FetchError),
}

impl FetchOutcome {
    /// True for `Exists` and `Downloaded`: the file counts as obtained.
    pub fn is_present(&self) -> bool {
        !matches!(self, FetchOutcome::Failed(_))
    }
}

/// Writes task files directly under `output_dir`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    output_dir: PathBuf,
    options: FetchOptions,
}

impl Fetcher {
    /// Creates the output directory (and parents) if absent.
    pub fn new(output_dir: impl Into<PathBuf>, options: FetchOptions) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        Ok(Self {
            output_dir,
            options,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn local_path(&self, task: &DownloadTask) -> PathBuf {
        self.output_dir.join(&task.filename)
    }

    /// Ensures `task.filename` exists locally, downloading it from `task.url`
    /// unless `skip_if_exists` is set and the file is already there.
    pub fn ensure_local(&self, task: &DownloadTask, skip_if_exists: bool) -> FetchOutcome {
        let path = self.local_path(task);
        if skip_if_exists && path.exists() {
            tracing::debug!(file = %task.filename, "already present, skipping request");
            return FetchOutcome::Exists;
        }

        match get::get_to_file(&task.url, &path, &self.options) {
            Ok(bytes) => {
                tracing::info!(url = %task.url, file = %task.filename, bytes, "downloaded");
                FetchOutcome::Downloaded { bytes }
            }
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!(url = %task.url, file = %task.filename, "timed out");
                } else {
                    tracing::debug!(url = %task.url, file = %task.filename, "fetch failed: {}", e);
                }
                FetchOutcome::Failed(e)
            }
        }
    }
}
