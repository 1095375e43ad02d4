// src/config.rs
//! Configuration management

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Default path offered when saving the JSON report
    pub output_path: Option<String>,
    pub what3words_api_key: Option<String>,
    pub colored_output: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            output_path: Some("nmea-output.json".to_string()),
            what3words_api_key: None,
            colored_output: true,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from the config file, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| AppError::Other(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| AppError::Other(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Other(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .map_err(|e| AppError::Other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("nmea-decoder")
            .join("config.json"))
    }

    /// Update the default output path
    pub fn update_output(&mut self, path: String) {
        self.output_path = Some(path);
    }

    /// Update the what3words API key
    pub fn update_api_key(&mut self, key: String) {
        self.what3words_api_key = Some(key);
    }
}
