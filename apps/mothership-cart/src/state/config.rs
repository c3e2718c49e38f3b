//! # Configuration State
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, once at startup, and is read-only afterwards.
//!
//! | Variable                   | Default | Effect                              |
//! |----------------------------|---------|-------------------------------------|
//! | `MOTHERSHIP_MINIMUM_MEALS` | `5`     | Free-shipping threshold             |
//! | `MOTHERSHIP_MENU_PATH`     | unset   | JSON menu file (sample menu if unset)|
//! | `MOTHERSHIP_LOG`           | `info`  | `tracing` filter directive          |

use std::env;
use std::path::PathBuf;

use mothership_core::{ThresholdPolicy, DEFAULT_MINIMUM_MEALS};

pub const MINIMUM_MEALS_VAR: &str = "MOTHERSHIP_MINIMUM_MEALS";
pub const MENU_PATH_VAR: &str = "MOTHERSHIP_MENU_PATH";
pub const LOG_VAR: &str = "MOTHERSHIP_LOG";

/// Host configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Free-shipping threshold handed to every new cart
    pub policy: ThresholdPolicy,

    /// Menu file; `None` means the built-in sample menu
    pub menu_path: Option<PathBuf>,

    /// Log filter directive
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let minimum_meals: i64 = match lookup(MINIMUM_MEALS_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(MINIMUM_MEALS_VAR.to_string()))?,
            None => DEFAULT_MINIMUM_MEALS,
        };
        let policy = ThresholdPolicy::new(minimum_meals)
            .map_err(|_| ConfigError::InvalidValue(MINIMUM_MEALS_VAR.to_string()))?;

        let menu_path = lookup(MENU_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| "info".to_string());

        Ok(AppConfig {
            policy,
            menu_path,
            log_filter,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            policy: ThresholdPolicy::default(),
            menu_path: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read menu file {}: {source}", path.display())]
    MenuUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid menu file {}: {reason}", path.display())]
    MenuInvalid { path: PathBuf, reason: String },
}
