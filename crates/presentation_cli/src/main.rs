//! Snowblower advisor CLI
//!
//! Fetches the weather for the configured location and says whether it is
//! time to clear the snow, and which way to throw it.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use application::AdvisoryService;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, WeatherAdapter, init_tracing};
use tracing::{error, info};

/// Snowblower advisor CLI
#[derive(Parser)]
#[command(name = "snowblower")]
#[command(author, version, about = "Snowblowing advice from live weather data", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "SNOWBLOWER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get snowblowing advice based on current and forecast conditions
    Advice {
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active configuration
    Config {
        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Log level forced by `-v` flags, if any
const fn log_level_override(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging, log_level_override(cli.verbose))?;

    let settings = config.advisor_settings()?;

    match cli.command {
        Commands::Advice { json } => {
            let location = settings.location.clone();
            info!(location = %location.display_name(), "Advice requested");

            let weather = WeatherAdapter::new(config.weather)?;
            let service = AdvisoryService::new(settings, Arc::new(weather));

            let rec = match service.get_advisory().await {
                Ok(rec) => rec,
                Err(e) if e.is_data_unavailable() => {
                    error!(error = %e, "Advisory failed");
                    eprintln!("❌ {}", render::DATA_UNAVAILABLE_MESSAGE);
                    std::process::exit(1);
                },
                Err(e) => return Err(e.into()),
            };

            if json {
                let body = serde_json::json!({
                    "location": location,
                    "recommendation": rec,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!("{}", render::render_advice(&rec, &location));
            }
        },

        Commands::Config { json } => {
            let snapshot = settings.config_snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", render::render_config(&snapshot));
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_verbosity_keeps_configured_level() {
        assert_eq!(log_level_override(0), None);
    }

    #[test]
    fn verbosity_one() {
        assert_eq!(log_level_override(1), Some("info"));
    }

    #[test]
    fn verbosity_two() {
        assert_eq!(log_level_override(2), Some("debug"));
    }

    #[test]
    fn verbosity_three_or_more() {
        assert_eq!(log_level_override(3), Some("trace"));
        assert_eq!(log_level_override(10), Some("trace"));
    }

    #[test]
    fn load_config_from_missing_path_fails() {
        let result = load_config(Some(Path::new("/nonexistent/snowblower.toml")));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/snowblower.toml"));
    }

    #[test]
    fn load_config_rejects_invalid_threshold() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[advisor]\naccumulation_threshold = -1.0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("accumulation_threshold"));
    }
}
