//! Model — BridgeSettings and its conversion into construction options.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::option::{with_diagnostics, with_parser, with_schema_url, with_version, BridgeOption};
use crate::parser::{DateAnchor, TimeOfDayParser, TIME_OF_DAY_PATTERN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings a host program can keep in a file or the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    pub version: Option<String>,
    pub schema_url: Option<String>,
    pub diagnostics: bool,
    /// Override for the stamp pattern. Matches are still parsed as `HH:MM:SS`.
    pub time_pattern: Option<String>,
    pub extract_severity: bool,
    /// Fixed date for stamps; the current UTC date when unset.
    pub anchor_date: Option<NaiveDate>,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            version: None,
            schema_url: None,
            diagnostics: false,
            time_pattern: None,
            extract_severity: true,
            anchor_date: None,
        }
    }
}

impl BridgeSettings {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pattern) = &self.time_pattern {
            if pattern.trim().is_empty() {
                return Err(ConfigError::Invalid("time_pattern must not be empty".to_string()));
            }
            self.build_parser()?;
        }
        if let Some(url) = &self.schema_url {
            if !url.is_empty() && !url.contains("://") {
                return Err(ConfigError::Invalid(format!(
                    "schema_url must be an absolute URL, got: {}",
                    url
                )));
            }
        }
        Ok(())
    }

    fn build_parser(&self) -> Result<TimeOfDayParser, ConfigError> {
        let pattern = self.time_pattern.as_deref().unwrap_or(TIME_OF_DAY_PATTERN);
        let anchor = match self.anchor_date {
            Some(date) => DateAnchor::Fixed(date),
            None => DateAnchor::Today,
        };

        let parser = TimeOfDayParser::with_pattern(pattern)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?
            .with_anchor(anchor)
            .with_severity_extraction(self.extract_severity);
        Ok(parser)
    }

    /// Construction options equivalent to these settings. The provider is
    /// never part of settings; pass it separately.
    pub fn into_options(self) -> Result<Vec<BridgeOption>, ConfigError> {
        self.validate()?;

        let parser = self.build_parser()?;
        let mut options = vec![
            with_parser(Arc::new(parser)),
            with_diagnostics(self.diagnostics),
        ];
        if let Some(version) = self.version {
            options.push(with_version(version));
        }
        if let Some(schema_url) = self.schema_url {
            options.push(with_schema_url(schema_url));
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::BridgeConfig;
    use crate::logs::global;

    #[test]
    fn test_defaults() {
        let s = BridgeSettings::default();
        assert!(s.version.is_none());
        assert!(s.schema_url.is_none());
        assert!(!s.diagnostics);
        assert!(s.time_pattern.is_none());
        assert!(s.extract_severity);
        assert!(s.anchor_date.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let s: BridgeSettings = toml::from_str(r#"version = "1.4.0""#).expect("partial TOML");
        assert_eq!(s.version.as_deref(), Some("1.4.0"));
        assert!(s.extract_severity); // default
    }

    #[test]
    fn test_deserialize_full_toml() {
        let toml_str = r#"
            version = "1.4.0"
            schema_url = "https://opentelemetry.io/schemas/1.26.0"
            diagnostics = true
            time_pattern = '\d{2}:\d{2}:\d{2}'
            extract_severity = false
            anchor_date = "2026-10-18"
        "#;
        let s: BridgeSettings = toml::from_str(toml_str).expect("full TOML");
        assert!(s.diagnostics);
        assert!(!s.extract_severity);
        assert_eq!(s.anchor_date, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let s = BridgeSettings {
            time_pattern: Some("([0-9]".to_string()),
            ..Default::default()
        };
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid time pattern"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let s = BridgeSettings {
            time_pattern: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_relative_schema_url() {
        let s = BridgeSettings {
            schema_url: Some("schemas/1.26.0".to_string()),
            ..Default::default()
        };
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("schema_url"));
    }

    #[test]
    fn test_into_options_applies_fields() {
        let s = BridgeSettings {
            version: Some("9.9.9".to_string()),
            schema_url: Some("https://example.com/schema".to_string()),
            diagnostics: true,
            ..Default::default()
        };
        let config = BridgeConfig::from_options(s.into_options().unwrap(), global::logger_provider);
        assert_eq!(config.version, "9.9.9");
        assert_eq!(config.schema_url, "https://example.com/schema");
        assert!(config.diagnostics);
        assert!(config.parser.is_some());
    }
}
