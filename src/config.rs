//! # Configuration
//!
//! Layered service configuration.
//!
//! Sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/local.toml` (optional)
//! 4. Environment variables prefixed `SHIPPING`, sections separated by
//!    `__`, e.g. `SHIPPING__SERVER__PORT=8080` or
//!    `SHIPPING__GEOCODING__API_KEY=...`
//!
//! A `.env` file in the working directory is loaded into the environment
//! first.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "SHIPPING";
const ENV_SEPARATOR: &str = "__";

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Geocoding provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocodingConfig {
    /// Provider API root, without the geocode path.
    pub base_url: String,
    /// Provider API key.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Geocoding provider.
    pub geocoding: GeocodingConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from `.env`, config files, and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is malformed and
    /// `ConfigError::Invalid` if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Returns a builder holding only the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5001_i64)?
            .set_default("geocoding.base_url", "https://maps.googleapis.com")?
            .set_default("geocoding.api_key", "")?
            .set_default("geocoding.timeout_ms", 5000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?)
    }

    /// Builds and validates configuration from a prepared builder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if deserialization fails and
    /// `ConfigError::Invalid` if validation fails.
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port must be non-zero"));
        }
        if self.geocoding.timeout_ms == 0 {
            return Err(ConfigError::invalid("geocoding.timeout_ms must be non-zero"));
        }
        if self.geocoding.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("geocoding.base_url must not be empty"));
        }
        Ok(())
    }

    /// Returns `host:port` for binding the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::build(AppConfig::defaults().unwrap()).unwrap();

        assert_eq!(config.server.port, 5001);
        assert_eq!(config.bind_address(), "0.0.0.0:5001");
        assert_eq!(config.geocoding.timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let builder = AppConfig::defaults()
            .unwrap()
            .set_override("server.port", 8080_i64)
            .unwrap()
            .set_override("logging.json", true)
            .unwrap();

        let config = AppConfig::build(builder).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.logging.json);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let builder = AppConfig::defaults()
            .unwrap()
            .set_override("geocoding.timeout_ms", 0_i64)
            .unwrap();

        let err = AppConfig::build(builder).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let builder = AppConfig::defaults()
            .unwrap()
            .set_override("geocoding.base_url", "  ")
            .unwrap();

        assert!(AppConfig::build(builder).is_err());
    }
}
