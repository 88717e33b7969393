use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::carousel::{self, Spring};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub animation: AnimationConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds; also the animation frame step.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Ring rotation animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// When false the ring jumps straight to its target.
    pub enabled: bool,
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            mouse_enabled: true,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 260.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl AnimationConfig {
    /// A spring at rest with these parameters.
    pub fn spring(&self) -> Spring {
        Spring::new(self.stiffness, self.damping, self.mass)
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/persona-select/config.toml`.
    /// Returns `Default` if the file is missing, unparseable or invalid.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::load_from(&config_path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Ok(None) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate a config file. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Reject values the event loop or the spring cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tui.tick_rate_ms",
                reason: "must be at least 1".to_string(),
            });
        }

        let spring = [
            ("animation.stiffness", self.animation.stiffness),
            ("animation.damping", self.animation.damping),
            ("animation.mass", self.animation.mass),
        ];
        for (field, value) in spring {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        let AnimationConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.animation;
        if !carousel::is_stable(stiffness, damping, mass) {
            return Err(ConfigError::Invalid {
                field: "animation",
                reason: format!(
                    "spring stiffness {stiffness}, damping {damping}, mass {mass} oscillate out of control"
                ),
            });
        }

        Ok(())
    }

    /// Directory for log files.
    pub fn log_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("persona-select").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("persona-select").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
