//! Severity levels that gate which records reach an output.

use std::fmt;
use std::str::FromStr;

/// Ordered from least to most severe, so `Ord` answers "is this record severe enough".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Finer-grained than debug; high-volume instrumentation.
    Trace = 0,
    /// Usually only enabled while debugging. Very verbose.
    Debug = 1,
    /// General operational entries about what is going on inside the application.
    #[default]
    Info = 2,
    /// Non-critical entries that deserve eyes.
    Warn = 3,
    /// Errors that should definitely be noted. Hooks often forward these to an error tracker.
    Error = 4,
}

impl Level {
    /// Canonical lowercase name, the same spelling [`FromStr`] accepts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// All levels, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }

    /// Numeric severity rank; higher is more severe.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::rank`]. Out-of-range ranks have no level.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns `true` if `self` is strictly less severe than `other`.
    ///
    /// ```
    /// use hierlog::Level;
    ///
    /// assert!(Level::Trace.less_severe_than(Level::Debug));
    /// assert!(!Level::Warn.less_severe_than(Level::Warn));
    /// assert!(!Level::Error.less_severe_than(Level::Trace));
    /// ```
    #[must_use]
    pub fn less_severe_than(self, other: Self) -> bool {
        self < other
    }
}

/// Renders a raw severity rank, falling back to `"unknown"` for ranks outside the defined levels.
#[must_use]
pub const fn name_of_rank(rank: u8) -> &'static str {
    match Level::from_rank(rank) {
        Some(level) => level.as_str(),
        None => "unknown",
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for anything that is not exactly a level name (ignoring case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
