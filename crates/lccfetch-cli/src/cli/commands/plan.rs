//! `lccfetch plan` – list candidate URLs in the order they would be tried.

use anyhow::Result;
use lccfetch_core::config::FetchConfig;

pub fn run_plan(cfg: &FetchConfig) -> Result<()> {
    for task in cfg.tasks()? {
        println!("{}\t{}", task.filename, task.url);
    }
    Ok(())
}
