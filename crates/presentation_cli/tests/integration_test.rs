//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "snowblower")]
#[command(author, version, about = "Snowblowing advice from live weather data", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Advice {
        #[arg(long)]
        json: bool,
    },
    Config {
        #[arg(long)]
        json: bool,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_advice_command() {
    let cli = parse_args(&["snowblower", "advice"]).unwrap();
    if let Commands::Advice { json } = cli.command {
        assert!(!json);
    } else {
        panic!("Expected Advice command");
    }
}

#[test]
fn cli_parses_advice_json() {
    let cli = parse_args(&["snowblower", "advice", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Advice { json: true }));
}

#[test]
fn cli_parses_config_command() {
    let cli = parse_args(&["snowblower", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config { json: false }));
}

#[test]
fn cli_parses_config_json() {
    let cli = parse_args(&["snowblower", "config", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Config { json: true }));
}

#[test]
fn cli_parses_config_path() {
    let cli = parse_args(&["snowblower", "--config", "/etc/snowblower.toml", "advice"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/snowblower.toml")));
}

#[test]
fn cli_parses_short_config_path() {
    let cli = parse_args(&["snowblower", "-c", "local.toml", "config"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
}

#[test]
fn cli_config_path_defaults_to_none() {
    let cli = parse_args(&["snowblower", "advice"]).unwrap();
    assert!(cli.config.is_none());
}

#[test]
fn cli_verbose_flag_single() {
    let cli = parse_args(&["snowblower", "-v", "advice"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_verbose_flag_multiple() {
    let cli = parse_args(&["snowblower", "-vvv", "advice"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_verbose_long_form() {
    let cli = parse_args(&["snowblower", "--verbose", "--verbose", "config"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_requires_subcommand() {
    let result = parse_args(&["snowblower"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_command() {
    let result = parse_args(&["snowblower", "forecast"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_json_before_subcommand() {
    let result = parse_args(&["snowblower", "--json", "advice"]);
    assert!(result.is_err());
}

#[test]
fn cli_help_is_an_error_kind_display_help() {
    let err = parse_args(&["snowblower", "--help"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn cli_version_is_an_error_kind_display_version() {
    let err = parse_args(&["snowblower", "--version"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
