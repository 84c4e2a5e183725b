use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::format::MAX_DIMENSION;

/// Main configuration for the minvid CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Frame packing settings
    pub pack: PackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pack: PackConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.pack.validate()?;
        Ok(())
    }
}

/// Settings for packing image sequences into a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Target frame width
    pub width: u32,

    /// Target frame height
    pub height: u32,

    /// Resize source images to the target size instead of requiring an
    /// exact match
    pub resize: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 96,
            resize: true,
        }
    }
}

impl PackConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_DIMENSION {
            return Err(ConfigError::InvalidValue {
                key: "pack.width".to_string(),
                value: self.width.to_string(),
            }
            .into());
        }

        if self.height == 0 || self.height > MAX_DIMENSION {
            return Err(ConfigError::InvalidValue {
                key: "pack.height".to_string(),
                value: self.height.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
