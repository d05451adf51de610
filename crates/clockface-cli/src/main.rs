//! Command-line front end for Clockface.
//!
//! Wires configuration, logging, and the formatter facade together:
//!
//! 1. Parse arguments
//! 2. Load configuration from `clockface-config.yaml` (or `--config`)
//! 3. Initialize structured logging (tracing)
//! 4. Run the requested command
//!
//! The host clock and the display zone are read only by the `now`
//! command; a bad zone does not stop `at`, `parse`, or `table`.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{NaiveTime, Utc};
use clap::{Parser, Subcommand};
use clockface_core::{ClockFormatter, ZoneSetting};
use clockface_core::config::ClockfaceConfig;
use clockface_core::reconstruction::offset_from_epoch;
use clockface_core::rounding::symbol_for_time;
use clockface_types::ClockSymbol;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "clockface-config.yaml";

/// Show the time as a half-hour clock face, or turn one back into a time.
#[derive(Debug, Parser)]
#[command(name = "clockface", version)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Zone to read instants in (utc, local, or +HH:MM). Overrides the
    /// configured zone and `CLOCKFACE_ZONE`.
    #[arg(long, global = true)]
    zone: Option<String>,

    /// Print the plain-text reading next to each glyph.
    #[arg(long, global = true)]
    label: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the clock face for the current time
    Now,
    /// Show the clock face for a wall-clock reading
    At {
        /// Time of day as HH:MM (24-hour)
        time: String,
    },
    /// Turn a clock face glyph back into its canonical instant
    Parse {
        /// One of the 24 clock face glyphs
        glyph: String,
    },
    /// List all 24 clock faces
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, initialize logging, and dispatch the command.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let show_label = cli.label || config.display.show_label;
    info!(
        zone = cli.zone.as_deref().unwrap_or(config.display.zone.as_str()),
        show_label,
        "Configuration loaded"
    );

    match &cli.command {
        Command::Now => {
            let zone = resolve_zone(cli.zone.as_deref(), &config)?;
            let formatter = ClockFormatter::with_resolver(zone);
            let now = Utc::now();
            debug!(%now, %zone, "read host clock");
            println!("{}", render(formatter.symbol_for(&now), show_label));
        }
        Command::At { time } => {
            let reading = parse_wall_clock(time)?;
            println!("{}", render(symbol_for_time(reading), show_label));
        }
        Command::Parse { glyph } => {
            // Reconstruction does not depend on the display zone.
            let instant = ClockFormatter::new().parse(glyph)?;
            println!("{}\t{}", instant.to_rfc3339(), offset_from_epoch(&instant));
        }
        Command::Table => {
            for symbol in ClockSymbol::ALL {
                println!(
                    "{:>2}\t{}\t{:>5}\t{}",
                    symbol.slot_index(),
                    symbol.glyph(),
                    symbol.label(),
                    symbol.offset_seconds()
                );
            }
        }
    }

    Ok(())
}

/// Load configuration from `path`, or from `clockface-config.yaml` if it
/// exists, falling back to defaults.
fn load_config(path: Option<&Path>) -> Result<ClockfaceConfig, CliError> {
    match path {
        Some(path) => Ok(ClockfaceConfig::from_file(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Ok(ClockfaceConfig::from_file(default_path)?)
            } else {
                Ok(ClockfaceConfig::parse("")?)
            }
        }
    }
}

/// Pick the zone: the command-line value wins over the configured one,
/// which already carries any `CLOCKFACE_ZONE` override. The configured
/// zone is not checked when the flag is given.
fn resolve_zone(flag: Option<&str>, config: &ClockfaceConfig) -> Result<ZoneSetting, CliError> {
    let zone = match flag {
        Some(value) => value.parse()?,
        None => config.display.zone_setting()?,
    };
    Ok(zone)
}

/// Parse an `HH:MM` argument.
fn parse_wall_clock(value: &str) -> Result<NaiveTime, CliError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|source| CliError::Time {
        value: value.to_owned(),
        source,
    })
}

/// Render a symbol, optionally followed by its plain-text reading.
fn render(symbol: ClockSymbol, show_label: bool) -> String {
    if show_label {
        format!("{} {}", symbol.glyph(), symbol.label())
    } else {
        symbol.glyph().to_owned()
    }
}
