//! Plain single-line text, the engine's default.

use super::Formatter;
use crate::engine::Record;
use std::fmt::Write;

/// `2025-01-15 14:30:00 INFO  app.net: connected`
///
/// The `name: ` part is left out for root loggers.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// strftime pattern.
    timestamp_format: String,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    pub const DEFAULT_TIMESTAMP: &'static str = "%Y-%m-%d %H:%M:%S";

    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: Self::DEFAULT_TIMESTAMP.to_string(),
        }
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Renders without the trailing newline.
    ///
    /// # Errors
    /// `Error::Format` if the timestamp pattern is not valid strftime.
    pub fn render(&self, record: &Record<'_>) -> Result<String, crate::Error> {
        let mut line = String::new();
        let ts = record.timestamp.format(&self.timestamp_format);
        let level = record.level.as_str().to_uppercase();
        let written = if record.name.is_empty() {
            write!(line, "{ts} {level:<5} {}", record.message)
        } else {
            write!(line, "{ts} {level:<5} {}: {}", record.name, record.message)
        };
        written.map_err(|_| {
            crate::Error::Format(format!(
                "invalid timestamp format: {:?}",
                self.timestamp_format
            ))
        })?;
        Ok(line)
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &Record<'_>) -> Result<Vec<u8>, crate::Error> {
        let mut line = self.render(record)?;
        line.push('\n');
        Ok(line.into_bytes())
    }
}
