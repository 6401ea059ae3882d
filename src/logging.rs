use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set, otherwise the configured level for
/// this crate with chatty HTTP internals kept at warn.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("warn,solex={default_level}"))
            .unwrap_or_else(|_| EnvFilter::new("warn,solex=info"))
    })
}

/// Initialize logging to a file.
///
/// The terminal belongs to the UI, so log lines go to `path` instead of
/// stdout/stderr. Lines are written by a background worker; keep the
/// returned guard alive until exit or buffered lines are lost.
pub fn init_logging(path: &Path, default_level: &str) -> Result<WorkerGuard> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(log_file = ?path, "Logging initialized");
    Ok(guard)
}
