//! The logger hierarchy.
//!
//! Application code holds an `Arc<dyn Logger>`, derives named children as it descends into
//! subsystems, and never needs to know which variant it got:
//!
//! - [`StdLogger`] writes through an [`Engine`](crate::engine::Engine)
//! - [`MemLogger`] captures messages for test assertions
//! - [`NopLogger`] discards everything
//!
//! ```
//! use hierlog::{Level, Logger, MemLogger};
//! use hierlog::log_info;
//! use std::sync::Arc;
//!
//! struct Server {
//!     log: Arc<dyn Logger>,
//! }
//!
//! let mem = MemLogger::new();
//! let root: Arc<dyn Logger> = Arc::new(mem.clone());
//! let server = Server { log: root.child(&["server"]) };
//! log_info!(server.log, "listening on {}", 8080);
//!
//! assert_eq!(mem.logs(Level::Info), vec!["listening on 8080"]);
//! ```

mod builder;
mod from_config;
mod mem;
mod nop;
mod std_logger;
mod writer;

pub use builder::LoggerBuilder;
pub use mem::MemLogger;
pub use nop::{NopLogger, NopWriter};
pub use std_logger::StdLogger;
pub use writer::LineWriter;

use crate::level::Level;
use std::fmt::Arguments;
use std::io;
use std::sync::Arc;

/// Separator between name components.
pub const NAME_SEPARATOR: &str = ".";

/// Receives and processes log messages.
///
/// Emission never fails from the caller's point of view. Implementations must be
/// `Send + Sync`; any method may be called concurrently.
pub trait Logger: Send + Sync {
    /// Returns a sub-logger with `names` appended to this logger's name.
    ///
    /// The child starts with this logger's current level. Later level changes on either side
    /// do not propagate.
    fn child(&self, names: &[&str]) -> Arc<dyn Logger>;

    /// Full dotted name; empty for a root logger.
    fn name(&self) -> &str;

    /// Current threshold; records less severe than this are dropped.
    fn level(&self) -> Level;

    /// Changes this logger's threshold only; parents and existing children keep theirs.
    fn set_level(&self, level: Level);

    /// `true` if a record at `level` would get past this logger's threshold.
    fn is_level_enabled(&self, level: Level) -> bool {
        !level.less_severe_than(self.level())
    }

    /// Returns a writer that logs every written line at `level`.
    ///
    /// Dropping the writer (or flushing it) emits a trailing unterminated line.
    fn writer_level(&self, level: Level) -> Box<dyn io::Write + Send>;

    /// Logs pre-formatted arguments at `level`. Every other emission method ends up here.
    fn log_fmt(&self, level: Level, args: Arguments<'_>);

    /// Logs a plain message at `level`.
    fn log(&self, level: Level, msg: &str) {
        self.log_fmt(level, format_args!("{msg}"));
    }

    /// Logs `msg` at trace level.
    fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    /// Logs `format_args!` output at trace level; see [`log_trace!`](crate::log_trace).
    fn trace_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(Level::Trace, args);
    }

    /// Logs `msg` at debug level.
    fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Logs `format_args!` output at debug level; see [`log_debug!`](crate::log_debug).
    fn debug_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(Level::Debug, args);
    }

    /// Logs `msg` at info level.
    fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Logs `format_args!` output at info level; see [`log_info!`](crate::log_info).
    fn info_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(Level::Info, args);
    }

    /// Logs `msg` at warn level.
    fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    /// Logs `format_args!` output at warn level; see [`log_warn!`](crate::log_warn).
    fn warn_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(Level::Warn, args);
    }

    /// Logs `msg` at error level.
    fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Logs `format_args!` output at error level; see [`log_error!`](crate::log_error).
    fn error_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(Level::Error, args);
    }
}

/// Appends name components to `name`, joined by [`NAME_SEPARATOR`].
///
/// ```
/// use hierlog::logger::append_name;
///
/// assert_eq!(append_name("", &[]), "");
/// assert_eq!(append_name("", &["a", "b"]), "a.b");
/// assert_eq!(append_name("a.b", &["c", "d"]), "a.b.c.d");
/// ```
#[must_use]
pub fn append_name(name: &str, names: &[&str]) -> String {
    if names.is_empty() {
        return name.to_string();
    }
    let tail = names.join(NAME_SEPARATOR);
    if name.is_empty() {
        tail
    } else {
        format!("{name}{NAME_SEPARATOR}{tail}")
    }
}

/// Logs at an explicit level with `format!` syntax.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log_fmt($level, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_name_composition() {
        assert_eq!(append_name("", &[]), "");
        assert_eq!(append_name("", &["a"]), "a");
        assert_eq!(append_name("", &["a", "b"]), "a.b");
        assert_eq!(append_name("a", &["b"]), "a.b");
        assert_eq!(append_name("a.b", &["c"]), "a.b.c");
        assert_eq!(append_name("a.b", &["c", "d"]), "a.b.c.d");
    }

    #[test]
    fn append_nothing_keeps_name() {
        assert_eq!(append_name("a.b", &[]), "a.b");
    }
}
