use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub datatypes: DatatypeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Knobs consumed by the datatype engine.
#[derive(Debug, Clone, Deserialize)]
pub struct DatatypeConfig {
    /// Whether order comparisons default to strict duration semantics.
    #[serde(default = "default_strict_order")]
    pub strict_order: bool,
    /// Upper bound on the number of items accepted in a list literal.
    #[serde(default)]
    pub max_list_items: Option<usize>,
}

const fn default_strict_order() -> bool {
    true
}

impl Default for DatatypeConfig {
    fn default() -> Self {
        Self {
            strict_order: default_strict_order(),
            max_list_items: None,
        }
    }
}

impl DatatypeConfig {
    /// ## Summary
    /// Checks that the configured values are usable.
    ///
    /// ## Errors
    /// Returns an error if `max_list_items` is set to zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_list_items == Some(0) {
            return Err(CoreError::InvalidConfiguration(
                "datatypes.max_list_items must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `lexval.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("datatypes.strict_order", true)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env vars, e.g. LEXVAL_DATATYPES__MAX_LIST_ITEMS
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.datatypes.validate()?;
        tracing::debug!(settings = ?settings, "Settings loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_config_defaults() {
        let config = DatatypeConfig::default();
        assert!(config.strict_order);
        assert_eq!(config.max_list_items, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn datatype_config_rejects_zero_list_limit() {
        let config = DatatypeConfig {
            strict_order: true,
            max_list_items: Some(0),
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test_log::test]
    fn settings_deserialize_partial_source() {
        let settings = Config::builder()
            .set_override("datatypes.max_list_items", 16)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        tracing::debug!(settings = ?settings, "Deserialized settings");

        assert!(settings.datatypes.strict_order);
        assert_eq!(settings.datatypes.max_list_items, Some(16));
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn settings_deserialize_lenient_order() {
        let settings = Config::builder()
            .set_override("datatypes.strict_order", false)
            .unwrap()
            .set_override("logging.level", "trace")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert!(!settings.datatypes.strict_order);
        assert_eq!(settings.logging.level, "trace");
    }
}
