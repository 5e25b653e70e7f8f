//! Global evreg configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{EvregError, EvregResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/evreg";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/evreg/config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct EvregConfig {
    /// Directory holding the stored collections (events.json,
    /// registrations.json)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for EvregConfig {
    fn default() -> Self {
        EvregConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl EvregConfig {
    pub fn config_path() -> EvregResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EvregError::Config("Could not determine config directory".into()))?
            .join("evreg");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file on first run.
    pub fn load() -> EvregResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: EvregConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| EvregError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EvregError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> EvregResult<()> {
        let contents = format!(
            "\
# evreg configuration

# Where events and registrations are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EvregError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EvregError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
