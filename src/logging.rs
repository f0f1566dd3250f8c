//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily rotating file rather than stderr, since the terminal
//! belongs to the TUI while it runs.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log filter if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "artview=info,warn";

/// Filter used when `--debug` is passed.
const DEBUG_LOG_FILTER: &str = "artview=debug,warn";

/// Initialize the logging system.
///
/// Log directory:
/// - Linux: `~/.local/share/artview/logs/`
/// - macOS: `~/Library/Application Support/artview/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\artview\logs\`
///
/// `RUST_LOG` takes precedence over both defaults.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created,
/// or if a global subscriber is already installed.
pub fn init(debug: bool) -> anyhow::Result<PathBuf> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "artview.log");

    let default_filter = if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Artview starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(log_dir)
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("artview").join("logs"))
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("Artview shutting down");
}
