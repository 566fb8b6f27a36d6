mod config;
mod map;
mod predict;
mod web;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::predict::{Satellite, SatelliteReport};

#[derive(Parser)]
#[command(name = "sat-view")]
#[command(about = "Live ground position of a satellite on a world map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tracker page
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the current report as JSON
    Fix {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report time (RFC3339), defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()),
        Commands::Fix { config, at } => fix(config.as_deref(), at.unwrap_or_else(Utc::now)),
        Commands::Validate { config } => validate(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Config error: {}", e);
            None
        }
    }
}

fn serve(path: Option<&Path>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn fix(path: Option<&Path>, at: DateTime<Utc>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let report = SatelliteReport::compute(&config.satellite, at);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: Option<&Path>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let sat = &config.satellite;
    match Satellite::from_tle(&sat.name, &sat.line1, &sat.line2) {
        Ok(satellite) => {
            println!(
                "Config is valid: {} (NORAD {}), epoch {}",
                satellite.name(),
                satellite.norad_id(),
                satellite.epoch()
            );
            println!(
                "  observer: {:.4}, {:.4}",
                config.observer.latitude, config.observer.longitude
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid elements for {}: {}", sat.name, e);
            ExitCode::FAILURE
        }
    }
}
