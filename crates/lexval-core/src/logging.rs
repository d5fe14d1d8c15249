//! Subscriber setup for binaries and tools embedding the engine.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `config.level`.
///
/// An unparsable level falls back to `info` with a warning.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let (filter, invalid) = match EnvFilter::try_new(config.level.as_str()) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    if invalid {
        tracing::warn!(level = %config.level, "Invalid log level in config, using info");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig {
            level: "not a level[".to_string(),
        };
        // Whichever call runs first in this process wins; the next must fail.
        let first = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(first.is_err() || second.is_err());
    }
}
