//! Dashboard configuration: data location, competition selection and plot
//! style, read from YAML.
//!
//! Resolution order: an explicit path, then `TACTIC_CONFIG_PATH`, then
//! built-in defaults. A blank variable counts as unset.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::render::style::PlotStyle;

pub const CONFIG_PATH_ENV: &str = "TACTIC_CONFIG_PATH";

/// Women's World Cup.
pub const DEFAULT_COMPETITION_ID: u32 = 72;
/// 2023 edition.
pub const DEFAULT_SEASON_ID: u32 = 107;
/// The 2023 final.
pub const DEFAULT_MATCH_ID: u64 = 3906390;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Root of an open-data checkout (the directory holding `matches/` and `events/`)
    pub data_root: PathBuf,
    pub competition_id: u32,
    pub season_id: u32,
    pub default_match_id: u64,
    pub style: PlotStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("open-data/data"),
            competition_id: DEFAULT_COMPETITION_ID,
            season_id: DEFAULT_SEASON_ID,
            default_match_id: DEFAULT_MATCH_ID,
            style: PlotStyle::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;
        config.validate()?;
        info!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Load from `explicit` if given, else from the environment, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_from_env_value(env::var(CONFIG_PATH_ENV).ok()),
        }
    }

    fn load_from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Self::from_file(Path::new(trimmed))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_root must not be empty".to_string()));
        }
        self.style.validate()
    }
}
