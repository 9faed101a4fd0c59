//! Tracing subscriber setup for the terminal client.
use anyhow::Result;

use crate::CliConfig;

/// Install the global tracing subscriber.
///
/// Log lines go to stderr so they never interleave with game text on stdout.
/// `RUST_LOG` takes precedence over [`CliConfig::log_filter`].
pub fn setup_logging(config: &CliConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(filter = %config.log_filter, "logging initialized");

    Ok(())
}
