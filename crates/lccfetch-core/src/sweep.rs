//! Best-effort sequential sweep over the task list.
//!
//! Tasks run strictly in order. A filename already obtained in this run is
//! never attempted again, so later candidate URLs for it are skipped; failures
//! are absorbed and the sweep moves on.

use std::collections::HashSet;

use crate::fetcher::FetchOutcome;
use crate::task::{expected_filenames, DownloadTask};

/// Counters for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Tasks handed to the fetch step.
    pub attempted: u32,
    pub downloaded: u32,
    pub existing: u32,
    pub failed: u32,
    /// Tasks skipped because their filename was already obtained.
    pub skipped: u32,
}

/// Outcome of a full sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Distinct filenames across all tasks, in first-appearance order.
    pub expected: Vec<String>,
    /// Filenames obtained this run (downloaded or already present).
    pub downloaded: HashSet<String>,
    pub stats: SweepStats,
}

impl SweepReport {
    pub fn is_complete(&self) -> bool {
        self.expected.iter().all(|f| self.downloaded.contains(f))
    }

    /// Expected filenames that were not obtained, in first-appearance order.
    pub fn missing(&self) -> Vec<&str> {
        self.expected
            .iter()
            .filter(|f| !self.downloaded.contains(*f))
            .map(String::as_str)
            .collect()
    }

    /// One-line summary printed at the end of a run.
    pub fn summary_line(&self) -> String {
        if self.is_complete() {
            format!("✅ Complete ({} files)", self.downloaded.len())
        } else {
            format!("⚠️  Missing: {}", self.missing().join(", "))
        }
    }
}

/// Runs `fetch` for each task whose filename has not been obtained yet.
pub fn sweep<F>(tasks: &[DownloadTask], mut fetch: F) -> SweepReport
where
    F: FnMut(&DownloadTask) -> FetchOutcome,
{
    let mut report = SweepReport {
        expected: expected_filenames(tasks),
        ..SweepReport::default()
    };

    for task in tasks {
        if report.downloaded.contains(&task.filename) {
            report.stats.skipped += 1;
            continue;
        }
        report.stats.attempted += 1;
        match fetch(task) {
            FetchOutcome::Exists => {
                report.stats.existing += 1;
                report.downloaded.insert(task.filename.clone());
            }
            FetchOutcome::Downloaded { .. } => {
                report.stats.downloaded += 1;
                report.downloaded.insert(task.filename.clone());
            }
            FetchOutcome::Failed(_) => report.stats.failed += 1,
        }
    }

    tracing::info!(
        attempted = report.stats.attempted,
        downloaded = report.stats.downloaded,
        existing = report.stats.existing,
        failed = report.stats.failed,
        skipped = report.stats.skipped,
        "sweep finished"
    );
    report
}
