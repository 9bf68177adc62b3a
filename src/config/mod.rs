//! TOML configuration for building a root logger.
//!
//! ```toml
//! [general]
//! level = "debug"
//!
//! [output]
//! target = "file"
//! path = "~/.local/state/app/app.log"
//!
//! [format]
//! style = "console"
//! colors = false
//! ```

mod structs;

pub use structs::{FormatConfig, GeneralConfig, OutputConfig};

use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "hierlog";
const FILE_NAME: &str = "config.toml";

/// Every section is optional; an empty file yields the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
    pub format: FormatConfig,
}

impl Config {
    /// Loads `<config dir>/hierlog/config.toml`, or defaults if the file does not exist.
    ///
    /// # Errors
    /// Fails if the platform has no config directory, or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads from an explicit path, or defaults if the file does not exist.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Default config file location.
    ///
    /// # Errors
    /// Fails when the platform has no notion of a config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(APP_DIR).join(FILE_NAME))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for anything [`Level::from_str`] rejects.
    ///
    /// [`Level::from_str`]: std::str::FromStr::from_str
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }
}
