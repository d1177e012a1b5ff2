//! irpilot - a terminal controller for IR signal-learning devices
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use irpilot_core::prelude::*;

/// irpilot - a terminal controller for IR signal-learning devices
#[derive(Parser, Debug)]
#[command(name = "irpilot")]
#[command(about = "Manage and replay learned IR signals from the terminal", long_about = None)]
struct Args {
    /// Device base URL (overrides the configured one), e.g. http://192.168.4.1
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to a settings file (defaults to irpilot.toml in the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Capture poll period in milliseconds
    #[arg(long, value_name = "MS")]
    poll_interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    irpilot_core::logging::init()?;

    // Load settings, then layer CLI overrides on top
    let mut settings = match &args.config {
        Some(path) => irpilot_app::load_settings_from(path)?,
        None => irpilot_app::load_settings(),
    };
    if let Some(url) = args.url {
        settings.device.url = url;
    }
    if let Some(ms) = args.poll_interval {
        settings.device.poll_interval_ms = ms;
    }

    // Fail fast on an unusable device URL before the terminal is taken over
    settings.device_url()?;

    info!("Settings: {:?}", settings.device);

    irpilot_tui::run(settings).await
}
