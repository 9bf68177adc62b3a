//! Building a logger from a [`Config`].

use super::LoggerBuilder;
use crate::config::Config;
use crate::fmt::{ConsoleFormatter, JsonFormatter, TextFormatter};

impl LoggerBuilder {
    /// Applies `config` on top of [`LoggerBuilder::new`].
    ///
    /// Unknown values are rejected rather than silently replaced by defaults.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`], [`crate::Error::InvalidFormat`] or
    /// [`crate::Error::InvalidTarget`] for values this crate does not know.
    pub fn from_config(config: &Config, names: &[&str]) -> Result<Self, crate::Error> {
        let level = config.parse_level()?;
        let builder = Self::new(names).level(level);
        let builder = Self::apply_output(builder, config)?;
        Self::apply_format(builder, config)
    }

    fn apply_output(builder: Self, config: &Config) -> Result<Self, crate::Error> {
        let output = &config.output;
        match output.target.to_lowercase().as_str() {
            "stderr" => Ok(builder.stderr()),
            "stdout" => Ok(builder.stdout()),
            "file" => match output.path.as_deref() {
                Some(path) if !path.trim().is_empty() => Ok(builder.file(path)),
                _ => Err(crate::Error::InvalidTarget(
                    "file target requires a path".to_string(),
                )),
            },
            other => Err(crate::Error::InvalidTarget(format!("{other:?}"))),
        }
    }

    fn apply_format(builder: Self, config: &Config) -> Result<Self, crate::Error> {
        let format = &config.format;
        match format.style.to_lowercase().as_str() {
            "text" => Ok(builder.formatter(
                TextFormatter::new().timestamp_format(format.timestamp.clone()),
            )),
            "console" => Ok(builder.formatter(ConsoleFormatter::new().colors(format.colors))),
            "json" => Ok(builder.formatter(JsonFormatter::new())),
            _ => Err(crate::Error::InvalidFormat(format.style.clone())),
        }
    }
}
