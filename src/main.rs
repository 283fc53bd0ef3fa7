//! TrichoScan - terminal hair and scalp analysis
//!
//! Binary entry point: parses arguments, sets up error reporting, logging and
//! configuration, then runs the TUI or the headless runner.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use trichoscan_app::config::{load_settings_with_overrides, SettingsOverrides};
use trichoscan_core::prelude::*;

/// TrichoScan - AI hair and scalp analysis in the terminal
#[derive(Parser, Debug)]
#[command(name = "trichoscan")]
#[command(about = "Analyze a hair or scalp photo with an AI vision service", long_about = None)]
struct Args {
    /// Image to scan at startup
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Run without the TUI, printing NDJSON events (requires IMAGE)
    #[arg(long)]
    headless: bool,

    /// Configuration file (default: <config dir>/trichoscan/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Scan dwell time in milliseconds
    #[arg(long, value_name = "N")]
    dwell_ms: Option<u64>,

    /// Analysis model name
    #[arg(long, value_name = "NAME")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    trichoscan_core::logging::init()?;

    let overrides = SettingsOverrides {
        dwell_ms: args.dwell_ms,
        model: args.model,
    };
    let settings = load_settings_with_overrides(args.config.as_deref(), &overrides);

    if args.headless {
        let Some(image) = args.image else {
            eprintln!("--headless requires an IMAGE argument");
            std::process::exit(2);
        };
        let code = headless::runner::run_headless(settings, image).await?;
        std::process::exit(code);
    }

    let result = trichoscan_tui::run(settings, args.image).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("TrichoScan exiting");
    result
}
