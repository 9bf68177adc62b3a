//! Forwarding of `log` crate records into a [`Logger`].
//!
//! Libraries that log through the `log` facade end up in the same pipeline as the
//! application's own records.

use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Trace,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

/// `log::Log` adapter around a shared logger.
struct LogCrateLogger {
    logger: Arc<dyn Logger>,
}

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_level_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = record.level().into();
        if self.logger.is_level_enabled(level) {
            self.logger.log_fmt(level, *record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs `logger` as the process-wide `log` crate logger.
///
/// Sets [`log::max_level`] to `Trace`; filtering is left to `logger`'s own threshold, which may
/// still change after installation.
///
/// # Errors
/// Returns the `log` crate's error if a global logger was already installed.
pub fn redirect_log(logger: Arc<dyn Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogCrateLogger { logger }))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
