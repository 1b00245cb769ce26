//! Engine Configuration
//! Sampling cadence, position TTL, and the mirror key, loadable from a JSON
//! file. A missing file yields defaults; a malformed file is an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::expiry::DEFAULT_TTL_MS;
use crate::types::errors::ConfigError;

/// Default sampling interval. Historical deployments used anything from 20ms
/// to 150ms; no single value is authoritative, so callers should configure it.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 100;

/// Mirror key under which the whole position map is stored as one JSON blob.
pub const DEFAULT_MIRROR_KEY: &str = "scroll_positions";

/// Tunable parameters for the scroll engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Viewport sampling cadence in milliseconds.
    pub sample_interval_ms: u64,
    /// Maximum age after which a saved position is ignored.
    pub position_ttl_ms: i64,
    /// Key the position map blob is stored under in the session mirror.
    pub mirror_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            position_ttl_ms: DEFAULT_TTL_MS,
            mirror_key: DEFAULT_MIRROR_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a JSON file.
    ///
    /// If the file does not exist, returns defaults.
    /// If the file exists but is malformed, returns a serialization error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Saves the configuration to a JSON file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))
    }
}
