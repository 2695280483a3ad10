use std::error::Error;
use std::path::Path;
use clap::Parser;
use tracing_subscriber;
use tracing_appender;
use tracing::info;

use mcat::cli::{self, Cli};
use mcat::config::Settings;

/// Main entry point for the MCAT application
///
/// Loads settings, initializes logging, then dispatches the requested
/// catalog command (list, providers, show, check).
///
/// # Errors
/// Returns an error if settings cannot be loaded, logging cannot be
/// initialized, or the catalog fails to load.
fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Cli::parse();

    // Load settings first
    let settings = Settings::new()?;

    // Initialize the subscriber first, before any file operations
    let file_appender = tracing_appender::rolling::RollingFileAppender::new(
        tracing_appender::rolling::Rotation::DAILY,
        // Use log file path from settings, or default to "logs"
        settings.logging.file.as_deref().unwrap_or_else(|| Path::new("logs")),
        "mcat",
    );

    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let max_level: tracing::Level = settings.logging.level.parse()?;

    tracing_subscriber::fmt()
        // Write to file only, keeping stdout clean for tables
        .with_writer(non_blocking)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_max_level(max_level)
        .init();

    info!("MCAT Starting up...");

    let log_path = settings.logging.file.as_deref().unwrap_or_else(|| Path::new("logs"));
    std::fs::create_dir_all(log_path)?;
    info!("Logging initialized");

    info!("Settings loaded");

    cli::run(args, &settings)?;

    Ok(())
}
