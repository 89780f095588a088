//! `lccfetch fetch` – sequential best-effort download sweep.

use anyhow::Result;
use lccfetch_core::config::FetchConfig;
use lccfetch_core::fetcher::{FetchOutcome, Fetcher};
use lccfetch_core::sweep;
use lccfetch_core::task::DownloadTask;

/// Per-file marker line: only fresh downloads are announced.
fn marker_line(task: &DownloadTask, outcome: &FetchOutcome) -> Option<String> {
    match outcome {
        FetchOutcome::Downloaded { .. } => Some(format!("✅ {}", task.filename)),
        FetchOutcome::Exists | FetchOutcome::Failed(_) => None,
    }
}

/// Runs the sweep and prints a marker per downloaded file plus a summary line.
/// Missing files are reported but do not make this an error.
pub fn run_fetch(cfg: &FetchConfig, skip_if_exists: bool) -> Result<()> {
    let tasks = cfg.tasks()?;
    let fetcher = Fetcher::new(&cfg.output_dir, cfg.fetch_options())?;

    println!("Downloading to {}/", fetcher.output_dir().display());
    tracing::info!(
        "fetching {} candidate(s) into {}",
        tasks.len(),
        fetcher.output_dir().display()
    );

    let report = sweep::sweep(&tasks, |task| {
        let outcome = fetcher.ensure_local(task, skip_if_exists);
        if let Some(line) = marker_line(task, &outcome) {
            println!("{}", line);
        }
        outcome
    });

    println!("{}", report.summary_line());
    if !report.is_complete() {
        tracing::warn!("missing after sweep: {}", report.missing().join(", "));
    }
    Ok(())
}
