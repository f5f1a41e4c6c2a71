//! Load — settings loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::{BridgeSettings, ConfigError};

pub const CONFIG_FILE_ENV: &str = "LINEBRIDGE_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "linebridge.toml";

impl BridgeSettings {
    /// Load settings from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var(CONFIG_FILE_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut settings = if Path::new(&config_path).exists() {
            tracing::info!("Loading bridge settings from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Settings file not found at {}, using environment variables", config_path);
            Self::from_env()
        };

        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let settings: BridgeSettings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Load settings from environment variables with defaults
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings
    }

    /// Overlay variables from `lookup` onto these settings. Unparsable
    /// values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup("LINEBRIDGE_VERSION") {
            self.version = Some(version);
        }
        if let Some(url) = lookup("LINEBRIDGE_SCHEMA_URL") {
            self.schema_url = Some(url);
        }
        if let Some(enabled) = lookup("LINEBRIDGE_DIAGNOSTICS").and_then(|s| s.parse().ok()) {
            self.diagnostics = enabled;
        }
        if let Some(pattern) = lookup("LINEBRIDGE_TIME_PATTERN") {
            self.time_pattern = Some(pattern);
        }
        if let Some(enabled) = lookup("LINEBRIDGE_EXTRACT_SEVERITY").and_then(|s| s.parse().ok()) {
            self.extract_severity = enabled;
        }
        if let Some(date) = lookup("LINEBRIDGE_ANCHOR_DATE").and_then(|s| s.parse().ok()) {
            self.anchor_date = Some(date);
        }
    }
}
