//! Tracing subscriber initialization.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initializes the global tracing subscriber from the configuration.
///
/// `RUST_LOG` takes precedence over the configured level; `LOG_FORMAT`
/// selects between human-readable text and JSON lines. Calling this twice
/// (as parallel tests do) is an error from the subscriber, which is
/// swallowed here.
pub fn init(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("tracing subscriber already initialized: {e}");
    }

    Ok(())
}
