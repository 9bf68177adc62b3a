//! Basic 16-color ANSI palette. Console logs only need a handful of distinguishable colors and
//! every terminal renders these.

use crate::level::Level;

/// SGR foreground color codes used by the console formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
    Gray,
    DarkGray,
}

impl Color {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    /// The numeric SGR parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "31",
            Self::Yellow => "33",
            Self::Cyan => "36",
            Self::Gray => "37",
            Self::DarkGray => "90",
        }
    }

    /// The full escape sequence that switches to this color.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// Default color per level.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => Self::Gray,
            Level::Info => Self::Cyan,
            Level::Warn => Self::Yellow,
            Level::Error => Self::Red,
        }
    }
}

/// Wraps `text` in `color` and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}
