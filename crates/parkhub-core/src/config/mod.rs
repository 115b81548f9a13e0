//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod logging;
pub mod parking;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::parking::{ParkingConfig, TariffConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (`default.toml` + environment overlay + `PARKHUB__*` variables).
/// Every section has defaults, so an empty source set yields a usable
/// single-lot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Slot layout and tariffs.
    #[serde(default)]
    pub parking: ParkingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `config_dir`.
    ///
    /// Merges `{config_dir}/default.toml`, then `{config_dir}/{env}.toml`,
    /// then environment variables prefixed with `PARKHUB` (nested keys
    /// separated by `__`, e.g. `PARKHUB__SERVER__PORT=9000`). Missing files
    /// are skipped. The merged result is validated before it is returned.
    pub fn load(config_dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{config_dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PARKHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints of every section.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::configuration("server.port must not be 0"));
        }
        self.parking.validate()
    }
}
