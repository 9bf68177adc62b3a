//! Logger that drops everything.

use super::Logger;
use crate::level::Level;

use std::fmt::Arguments;
use std::io;
use std::sync::Arc;

/// Discards every message. Useful as a default for components that were given no logger.
///
/// Its level is pinned at [`Level::Error`] and [`Logger::is_level_enabled`] always answers
/// `false`, so callers guarding expensive work skip it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NopLogger;

impl NopLogger {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for NopLogger {
    fn child(&self, _names: &[&str]) -> Arc<dyn Logger> {
        Arc::new(Self)
    }

    fn name(&self) -> &str {
        ""
    }

    fn level(&self) -> Level {
        Level::Error
    }

    fn set_level(&self, _level: Level) {}

    fn is_level_enabled(&self, _level: Level) -> bool {
        false
    }

    fn writer_level(&self, _level: Level) -> Box<dyn io::Write + Send> {
        Box::new(NopWriter)
    }

    fn log_fmt(&self, _level: Level, _args: Arguments<'_>) {}

    fn log(&self, _level: Level, _msg: &str) {}
}

/// Writer that accepts and discards all bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopWriter;

impl io::Write for NopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn nothing_is_enabled() {
        let logger = NopLogger::new();
        for level in Level::all() {
            assert!(!logger.is_level_enabled(level));
        }
        logger.set_level(Level::Trace);
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn children_are_nop_too() {
        let child = NopLogger.child(&["a", "b"]);
        assert_eq!(child.name(), "");
        assert!(!child.is_level_enabled(Level::Error));
        child.error("dropped");
    }

    #[test]
    fn writer_swallows_everything() {
        let mut w = NopLogger.writer_level(Level::Info);
        assert_eq!(w.write(b"abc\n").unwrap(), 4);
        w.flush().unwrap();
    }
}
