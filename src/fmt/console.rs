//! Colored, column-aligned output for interactive terminals.

use super::{Color, Formatter, colorize, trim_pad_left};
use crate::engine::Record;
use std::fmt::Write;

/// `15.01.2025 14:30:00 INFO                                  app.net ▶ connected`
///
/// The name column is right-aligned and cut from the left, so nested loggers keep their most
/// specific components visible.
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    colors_enabled: bool,
    name_width: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleFormatter {
    pub const TIMESTAMP: &'static str = "%d.%m.%Y %H:%M:%S";
    pub const SYMBOL: &'static str = "▶";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
            name_width: 40,
        }
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colors_enabled {
            colorize(text, color)
        } else {
            text.to_string()
        }
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, record: &Record<'_>) -> Result<Vec<u8>, crate::Error> {
        let level_color = Color::for_level(record.level);

        let mut ts = String::new();
        write!(ts, "{}", record.timestamp.format(Self::TIMESTAMP))
            .map_err(|e| crate::Error::Format(e.to_string()))?;

        let tag: String = record.level.as_str().to_uppercase().chars().take(4).collect();
        let name = trim_pad_left(record.name, self.name_width);

        let line = format!(
            "{} {} {} {} {}\n",
            self.paint(&ts, Color::DarkGray),
            self.paint(&tag, level_color),
            name,
            self.paint(Self::SYMBOL, level_color),
            record.message,
        );
        Ok(line.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use chrono::{Local, TimeZone};

    fn record<'a>(level: Level, name: &'a str, message: &'a str) -> Record<'a> {
        Record {
            timestamp: Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap(),
            level,
            name,
            message,
        }
    }

    fn render(f: &ConsoleFormatter, record: &Record<'_>) -> String {
        String::from_utf8(f.format(record).unwrap()).unwrap()
    }

    #[test]
    fn plain_layout() {
        let f = ConsoleFormatter::new().colors(false).name_width(8);
        assert_eq!(
            render(&f, &record(Level::Warn, "app.net", "slow")),
            "15.01.2025 14:30:00 WARN  app.net ▶ slow\n"
        );
    }

    #[test]
    fn level_tag_is_four_letters() {
        let f = ConsoleFormatter::new().colors(false).name_width(1);
        let line = render(&f, &record(Level::Error, "x", "m"));
        assert!(line.contains(" ERRO x "), "{line}");
        let line = render(&f, &record(Level::Trace, "x", "m"));
        assert!(line.contains(" TRAC x "), "{line}");
    }

    #[test]
    fn long_names_keep_their_tail() {
        let f = ConsoleFormatter::new().colors(false).name_width(4);
        let line = render(&f, &record(Level::Info, "service.http", "m"));
        assert!(line.contains(" INFO http ▶ m"), "{line}");
    }

    #[test]
    fn colored_layout() {
        let f = ConsoleFormatter::new().name_width(1);
        let line = render(&f, &record(Level::Info, "a", "hello"));
        assert_eq!(
            line,
            "\x1b[90m15.01.2025 14:30:00\x1b[0m \x1b[36mINFO\x1b[0m a \x1b[36m▶\x1b[0m hello\n"
        );
    }
}
