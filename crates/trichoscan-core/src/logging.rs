//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "TRICHOSCAN_LOG";

const LOG_FILE_NAME: &str = "trichoscan.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/trichoscan/logs/` (or the platform's
/// local data directory). The terminal belongs to the TUI, so nothing is
/// written to stdout/stderr.
/// Log level is controlled by `TRICHOSCAN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TRICHOSCAN_LOG=debug cargo run -- scalp.jpg
/// TRICHOSCAN_LOG=trichoscan_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via TRICHOSCAN_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(
            "warn,trichoscan=info,trichoscan_core=info,trichoscan_vision=info,trichoscan_app=info,trichoscan_tui=info",
        ));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("TrichoScan starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    data_directory().join("logs")
}

/// Base directory for files TrichoScan writes (logs, exported reports)
pub fn data_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("trichoscan")
}
