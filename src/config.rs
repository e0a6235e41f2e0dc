use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AppError;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.toml");

/// Delays of the optimistic submit flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Time the loading view stays up before success is shown
    pub success_delay_ms: u64,
    /// Time the success view stays up before the host closes the app
    pub close_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: 2000,
            close_delay_ms: 3000,
        }
    }
}

impl SubmissionConfig {
    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
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

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Fluent locale, e.g. `ru-RU`
    pub locale: String,
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "ru-RU".to_string(),
            submission: SubmissionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    #[allow(dead_code)]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Configuration compiled into the binary, defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.locale, "ru-RU");
        assert_eq!(config.submission.success_delay(), Duration::from_secs(2));
        assert_eq!(config.submission.close_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml("locale = \"en-US\"\n[submission]\nclose_delay_ms = 10\n")
            .unwrap();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.submission.success_delay_ms, 2000);
        assert_eq!(config.submission.close_delay_ms, 10);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(matches!(
            AppConfig::from_toml("locale = 5"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_level_filter() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
    }
}
