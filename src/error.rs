//! Unified error type for all hierlog operations.

use crate::level::ParseLevelError;

/// Error type for hierlog operations.
///
/// Emission never returns this to the caller; it flows from outputs, formatters and hooks into
/// the engine, which reports it on stderr.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an output or while reading config.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid log level string.
    InvalidLevel(ParseLevelError),
    /// Unknown formatter style in config.
    InvalidFormat(String),
    /// Unknown output target in config, or a file target without a path.
    InvalidTarget(String),
    /// A formatter failed to render a record.
    Format(String),
    /// A hook rejected a record.
    Hook(String),
}

impl Error {
    /// Shorthand for hooks that fail with a plain message.
    #[must_use]
    pub fn hook(msg: impl Into<String>) -> Self {
        Self::Hook(msg.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(e) => write!(f, "{e}"),
            Self::InvalidFormat(s) => write!(f, "invalid format style: {s:?}"),
            Self::InvalidTarget(s) => write!(f, "invalid output target: {s}"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::Hook(s) => write!(f, "hook error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidLevel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}
