//! Run configuration.
//!
//! Every field has a default, so an empty document (or no file at all) gives
//! the documented starting powers. Unknown keys are rejected.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Starting power of a lion unless configured otherwise.
pub const LION_POWER: f64 = 250.0;
/// Starting power of a wolf unless configured otherwise.
pub const WOLF_POWER: f64 = 100.0;
/// Starting power of a tiger unless configured otherwise.
pub const TIGER_POWER: f64 = 300.0;

/// Top-level configuration for a fauna run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaunaConfig {
    pub carnivore_power: CarnivorePowers,
}

/// Starting power for each carnivore variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarnivorePowers {
    pub lion: f64,
    pub wolf: f64,
    pub tiger: f64,
}

impl Default for CarnivorePowers {
    fn default() -> Self {
        Self {
            lion: LION_POWER,
            wolf: WOLF_POWER,
            tiger: TIGER_POWER,
        }
    }
}

impl CarnivorePowers {
    /// Configured power for a carnivore variant by display name.
    pub fn get(&self, carnivore: &str) -> Option<f64> {
        match carnivore {
            "Lion" => Some(self.lion),
            "Wolf" => Some(self.wolf),
            "Tiger" => Some(self.tiger),
            _ => None,
        }
    }
}

impl FaunaConfig {
    /// Parse a YAML document and validate it.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = if s.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(s)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&data)?;
        tracing::debug!(path = %path.display(), ?config, "loaded fauna config");
        Ok(config)
    }

    /// Reject negative, NaN or infinite powers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.carnivore_power;
        for (carnivore, value) in [("Lion", p.lion), ("Wolf", p.wolf), ("Tiger", p.tiger)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPower { carnivore, value });
            }
        }
        Ok(())
    }
}
