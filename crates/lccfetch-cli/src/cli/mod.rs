//! CLI for lccfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lccfetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_plan};

/// Top-level CLI. With no subcommand, runs `fetch` with the configured defaults.
#[derive(Debug, Parser)]
#[command(name = "lccfetch")]
#[command(about = "Fetch LCC sample files from a CDN, trying alternate base URLs", long_about = None)]
pub struct Cli {
    /// Path to a config.toml (default: $XDG_CONFIG_HOME/lccfetch/config.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every missing file, first working candidate URL wins.
    Fetch {
        /// Write files here instead of the configured output directory.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Re-download files even if they already exist locally.
        #[arg(long)]
        refresh: bool,
    },

    /// Print the ordered candidate list without downloading anything.
    Plan,
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Fetch {
            output_dir: None,
            refresh: false,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_default() {
            CliCommand::Fetch {
                output_dir,
                refresh,
            } => {
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                run_fetch(&cfg, !refresh)?;
            }
            CliCommand::Plan => run_plan(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
