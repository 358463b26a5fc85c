//! File-backed tracing. The terminal belongs to the UI, so nothing is ever
//! written to stdout or stderr while the app runs.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides `log.level`.
pub const LOG_ENV: &str = "MOBIFACIL_LOG";

/// Install the global subscriber. Returns `false` when no log file is
/// configured and logging stays off.
pub fn init_tracing(log: &LogConfig) -> anyhow::Result<bool> {
    let Some(path) = &log.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&log.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))?;

    Ok(true)
}
