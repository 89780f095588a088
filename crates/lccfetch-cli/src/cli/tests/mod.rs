//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args_defaults_to_fetch() {
    let cli = parse(&["lccfetch"]);
    assert!(cli.config.is_none());
    assert!(cli.command.is_none());
    match cli.command.unwrap_or_default() {
        CliCommand::Fetch {
            output_dir,
            refresh,
        } => {
            assert!(output_dir.is_none());
            assert!(!refresh);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_flags() {
    match parse(&["lccfetch", "fetch", "--output-dir", "/tmp/lcc", "--refresh"]).command {
        Some(CliCommand::Fetch {
            output_dir,
            refresh,
        }) => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp/lcc")));
            assert!(refresh);
        }
        _ => panic!("expected Fetch with flags"),
    }
}

#[test]
fn cli_parse_plan_with_global_config() {
    let cli = parse(&["lccfetch", "plan", "--config", "/etc/lcc.toml"]);
    assert!(matches!(cli.command, Some(CliCommand::Plan)));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/lcc.toml")));
}

#[test]
fn cli_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["lccfetch", "checksum", "x"]).is_err());
}
