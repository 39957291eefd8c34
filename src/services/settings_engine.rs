// Settings Engine
// Loads and validates the RecentsConfig JSON file.
// The file lives at the platform-specific config path unless overridden.

use std::fs;
use std::path::Path;

use log::{debug, info};
use url::Url;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::RecentsConfig;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&self) -> Result<RecentsConfig, SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine reading the config as JSON from disk.
pub struct SettingsEngine {
    config_path: String,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `config.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("config.json")
                .to_string_lossy()
                .to_string(),
        };

        Self { config_path }
    }

    /// Rejects configs the pipeline cannot run with.
    pub fn validate(config: &RecentsConfig) -> Result<(), SettingsError> {
        let origin = Url::parse(&config.app.origin).map_err(|e| {
            SettingsError::InvalidValue(format!("app.origin '{}': {}", config.app.origin, e))
        })?;
        if !origin.has_host() {
            return Err(SettingsError::InvalidValue(format!(
                "app.origin '{}' has no host",
                config.app.origin
            )));
        }
        if config.app.app_name.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "app.app_name cannot be empty".to_string(),
            ));
        }
        if config.history.max_results == 0 {
            return Err(SettingsError::InvalidValue(
                "history.max_results must be positive".to_string(),
            ));
        }
        if config.pins.storage_key.is_empty() {
            return Err(SettingsError::InvalidValue(
                "pins.storage_key cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads the config file.
    ///
    /// A missing file yields defaults. A malformed or invalid file is an error.
    fn load(&self) -> Result<RecentsConfig, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!("no config at {}, using defaults", self.config_path);
            return Ok(RecentsConfig::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: RecentsConfig = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        info!("loaded config from {}", self.config_path);
        Ok(settings)
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
