//! Logging configuration using tracing
//!
//! Logging goes to a rolling file, never to stdout: stdout belongs to the
//! terminal UI.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/ir-pilot/logs/`
/// Log level is controlled by the `IRPILOT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// IRPILOT_LOG=debug irpilot
/// IRPILOT_LOG=trace irpilot
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "irpilot.log");

    // Default to info, allow override via IRPILOT_LOG
    let env_filter = EnvFilter::try_from_env("IRPILOT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("irpilot=info,warn"));

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

    tracing::info!("irpilot starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("ir-pilot").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("irpilot.log"))
}
