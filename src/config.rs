//! App configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are baked in with
//! `option_env!` when the crate is compiled:
//!
//! - `MEDIBUDDY_STORAGE_KEY`: localStorage key for the profile slot
//! - `MEDIBUDDY_LOG_LEVEL`: `error`, `warn`, `info`, `debug` (default), `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "medibuddy:user";

/// Post-auth landing route.
pub const HOME_PATH: &str = "/home";
/// Entry route for signed-out users.
pub const LOGIN_PATH: &str = "/login";

/// Browser console verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ConfigError::UnknownLogLevel(other.to_owned())),
        }
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn to_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), log_level: LogLevel::default() }
    }
}

impl AppConfig {
    /// Build config from the compile-time overrides, falling back to
    /// defaults (with a warning) when an override is malformed.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("MEDIBUDDY_STORAGE_KEY"), option_env!("MEDIBUDDY_LOG_LEVEL")) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("invalid build config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from optional raw values; `None` selects the default.
    pub fn from_values(storage_key: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let storage_key = match storage_key.map(str::trim) {
            Some("") => return Err(ConfigError::Empty("storage key")),
            Some(key) => key.to_owned(),
            None => DEFAULT_STORAGE_KEY.to_owned(),
        };
        let log_level = log_level.map(LogLevel::parse).transpose()?.unwrap_or_default();
        Ok(Self { storage_key, log_level })
    }
}
