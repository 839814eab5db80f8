//! # soonami-config
//!
//! Layered configuration loading for Soonami using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOONAMI_*` prefix, `__` as separator)
//! 2. Project-level `.soonami/config.toml`
//! 3. User-level `~/.config/soonami/config.toml`
//! 4. Built-in defaults
//!
//! Only presentation is configurable. The feed endpoint is fixed and has
//! no configuration key.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SOONAMI_DISPLAY__TIMEZONE` -> `display.timezone`,
//! `SOONAMI_LABELS__ALERT_YES` -> `labels.alert_yes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use soonami_config::SoonamiConfig;
//!
//! let config = SoonamiConfig::load_with_dotenv().expect("config");
//! println!("alert label for yes: {}", config.labels.alert_yes);
//! ```

mod display;
mod error;
mod labels;

pub use display::{DisplayConfig, DisplayFormat, TimeZoneChoice};
pub use error::ConfigError;
pub use labels::AlertLabels;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SoonamiConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub labels: AlertLabels,
}

impl SoonamiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a label is blank.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".soonami/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SOONAMI_").split("__"))
    }

    /// Check values that deserialize fine but cannot be displayed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first blank label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(field) = self.labels.blank_field() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: "label must not be blank".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("soonami").join("config.toml"))
    }
}
