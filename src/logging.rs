//! Structured logging setup using the `tracing` crate.
//!
//! The tree and the menu session emit `tracing` events. Nothing is printed
//! unless a binary calls [`init_logging`]. Log lines go to stderr so they never
//! interleave with the menu on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive string, e.g.
/// `ROSTER_LOG=roster::tree=debug`. It wins over the configured level.
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Install a global subscriber that writes to stderr.
///
/// `level` is used when [`LOG_ENV`] is unset: trace, debug, info, warn, error or off.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = build_env_filter(level)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Build the filter from [`LOG_ENV`], falling back to `level`.
fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| Error::Logging(format!("Invalid log level {:?}: {}", level, e)))
}
