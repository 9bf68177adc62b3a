//! Stepwise construction of a configured [`StdLogger`].

use super::{Logger, StdLogger};
use crate::engine::Hook;
use crate::fmt::{ConsoleFormatter, Formatter};
use crate::level::Level;
use crate::output::{FileOutput, Output, TerminalOutput};

use std::path::PathBuf;
use std::sync::Arc;

/// Configures a root logger before handing it out.
///
/// ```
/// use hierlog::{Level, Logger, LoggerBuilder};
///
/// let logger = LoggerBuilder::new(&["app"])
///     .stdout()
///     .level(Level::Debug)
///     .console_formatter()
///     .build();
///
/// assert_eq!(logger.name(), "app");
/// assert!(logger.is_level_enabled(Level::Debug));
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    logger: StdLogger,
}

impl LoggerBuilder {
    /// Starts from the engine defaults: Info, stderr, text format, no hooks.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            logger: StdLogger::new(names),
        }
    }

    #[must_use]
    pub fn output(self, output: impl Output + 'static) -> Self {
        self.logger.set_output(output);
        self
    }

    /// Like [`output`](Self::output), for an output other loggers also write to.
    #[must_use]
    pub fn shared_output(self, output: Arc<dyn Output>) -> Self {
        self.logger.set_shared_output(output);
        self
    }

    #[must_use]
    pub fn stderr(self) -> Self {
        self.output(TerminalOutput::stderr())
    }

    #[must_use]
    pub fn stdout(self) -> Self {
        self.output(TerminalOutput::stdout())
    }

    /// Appends to `path`; a leading `~` is expanded at write time.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.output(FileOutput::new(path))
    }

    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.logger.set_level(level);
        self
    }

    #[must_use]
    pub fn formatter(self, formatter: impl Formatter + 'static) -> Self {
        self.logger.set_formatter(formatter);
        self
    }

    /// Colored console layout with the default name width.
    #[must_use]
    pub fn console_formatter(self) -> Self {
        self.formatter(ConsoleFormatter::new())
    }

    /// Registers `hook` to fire for each of `levels`, after hooks registered earlier.
    #[must_use]
    pub fn hook(self, levels: &[Level], hook: impl Hook + 'static) -> Self {
        self.logger.add_hook(levels, hook);
        self
    }

    /// Returns a logger that is independent of anything still holding the builder's state.
    #[must_use]
    pub fn build(self) -> StdLogger {
        self.logger.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Record;
    use crate::output::WriterOutput;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn defaults_match_a_fresh_logger() {
        let logger = LoggerBuilder::new(&[]).build();
        assert_eq!(logger.name(), "");
        assert_eq!(logger.level(), Level::Info);
    }

    #[test]
    fn configured_pipeline_is_used() {
        let output = Arc::new(WriterOutput::new(Vec::new()));
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let logger = LoggerBuilder::new(&["svc", "api"])
            .shared_output(output.clone())
            .level(Level::Debug)
            .formatter(|r: &Record<'_>| -> Result<Vec<u8>, crate::Error> {
                Ok(format!("{}|{}\n", r.name, r.message).into_bytes())
            })
            .hook(&[Level::Debug], move |_: &Record<'_>| -> Result<(), crate::Error> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .build();

        logger.debug("ready");
        logger.trace("hidden");

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(
            output.with_inner(|buf| String::from_utf8_lossy(buf).into_owned()),
            "svc.api|ready\n"
        );
    }
}
