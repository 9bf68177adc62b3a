//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where records are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stderr`, `stdout` or `file`.
    pub target: String,
    /// Log file path, required for the `file` target.
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stderr".to_string(),
            path: None,
        }
    }
}

/// How records are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// `text`, `console` or `json`.
    pub style: String,
    /// ANSI colors, console style only.
    pub colors: bool,
    /// strftime pattern, text style only.
    pub timestamp: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: "text".to_string(),
            colors: true,
            timestamp: crate::fmt::TextFormatter::DEFAULT_TIMESTAMP.to_string(),
        }
    }
}
