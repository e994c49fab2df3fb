// TOML config adapter - Reads the optional `[chopper]` settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ChopperError, ChopperResult};

/// File consulted when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "chopper.toml";

/// Settings read from a config file; absent keys fall through to defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub edl: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub fps: Option<f64>,
    pub verbose: Option<bool>,
    pub overwrite: Option<bool>,
    pub ffmpeg: Option<String>,
    pub jobs: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    #[serde(default)]
    chopper: FileConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load the explicit config file, or `chopper.toml` from the working
    /// directory when it exists. An explicit path must exist.
    pub fn discover(explicit: Option<&Path>) -> ChopperResult<Option<FileConfig>> {
        match explicit {
            Some(path) => Self::load(path).map(Some),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback).map(Some)
                } else {
                    debug!("No {} in working directory", DEFAULT_CONFIG_FILE);
                    Ok(None)
                }
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ChopperResult<FileConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| ChopperError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config = Self::parse(&content).map_err(|e| ChopperError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
        let document: ConfigDocument = toml::from_str(content)?;
        Ok(document.chopper)
    }
}
