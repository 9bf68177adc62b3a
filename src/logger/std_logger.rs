//! The production logger: a name plus its own [`Engine`].

use super::{LineWriter, Logger, append_name};
use crate::engine::{Engine, Hook, LevelHook};
use crate::fmt::Formatter;
use crate::level::Level;
use crate::output::Output;

use std::fmt::Arguments;
use std::io;
use std::sync::Arc;

/// Logger backed by an [`Engine`].
///
/// Deriving a child (via [`StdLogger::sub`], [`Logger::child`] or [`Clone`]) copies the engine
/// configuration into a fresh engine. Output, formatter and installed hooks are shared with the
/// parent; level and hook list belong to the child from then on.
///
/// ```
/// use hierlog::{Level, Logger, StdLogger};
///
/// let root = StdLogger::new(&["app"]);
/// root.set_level(Level::Warn);
///
/// let db = root.sub(&["db"]);
/// db.set_level(Level::Error);
///
/// assert_eq!(db.name(), "app.db");
/// assert_eq!(root.level(), Level::Warn);
/// ```
#[derive(Debug)]
pub struct StdLogger {
    name: Arc<str>,
    engine: Arc<Engine>,
}

impl Default for StdLogger {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl StdLogger {
    /// A root logger with a fresh default engine (Info, stderr, text format).
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self::with_engine(&append_name("", names), Engine::new())
    }

    /// Wraps an existing engine, for callers that configure the engine directly.
    #[must_use]
    pub fn with_engine(name: &str, engine: Engine) -> Self {
        Self {
            name: Arc::from(name),
            engine: Arc::new(engine),
        }
    }

    /// Typed counterpart of [`Logger::child`]; the result can still take hooks.
    #[must_use]
    pub fn sub(&self, names: &[&str]) -> Self {
        let name = if names.is_empty() {
            Arc::clone(&self.name)
        } else {
            Arc::from(append_name(&self.name, names))
        };
        Self {
            name,
            engine: Arc::new(self.engine.fork()),
        }
    }

    /// The engine this logger writes through.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Registers `hook` for the given levels on this logger only.
    ///
    /// Returns `self` so registrations can be chained.
    pub fn add_hook(&self, levels: &[Level], hook: impl Hook + 'static) -> &Self {
        self.engine.add_hook(LevelHook::new(levels, hook));
        self
    }

    pub fn set_output(&self, output: impl Output + 'static) -> &Self {
        self.engine.set_output(Arc::new(output));
        self
    }

    /// Shares one output instance between independently configured loggers.
    pub fn set_shared_output(&self, output: Arc<dyn Output>) -> &Self {
        self.engine.set_output(output);
        self
    }

    pub fn set_formatter(&self, formatter: impl Formatter + 'static) -> &Self {
        self.engine.set_formatter(Arc::new(formatter));
        self
    }

    /// Flushes the output; failures are reported on stderr.
    pub fn flush(&self) {
        self.engine.flush();
    }

    /// Another handle onto the same engine, used by writers that outlive the borrow.
    fn share(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl Clone for StdLogger {
    /// An independent copy with the same name.
    fn clone(&self) -> Self {
        self.sub(&[])
    }
}

impl Logger for StdLogger {
    fn child(&self, names: &[&str]) -> Arc<dyn Logger> {
        Arc::new(self.sub(names))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        self.engine.level()
    }

    fn set_level(&self, level: Level) {
        self.engine.set_level(level);
    }

    fn is_level_enabled(&self, level: Level) -> bool {
        self.engine.is_level_enabled(level)
    }

    fn writer_level(&self, level: Level) -> Box<dyn io::Write + Send> {
        let logger = self.share();
        Box::new(LineWriter::new(move |line: &str| {
            logger.log(level, line);
        }))
    }

    fn log_fmt(&self, level: Level, args: Arguments<'_>) {
        self.engine.log(level, &self.name, args);
    }

    fn log(&self, level: Level, msg: &str) {
        self.engine.log(level, &self.name, format_args!("{msg}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Record;
    use crate::output::WriterOutput;
    use std::io::Write;

    fn captured(names: &[&str]) -> (StdLogger, Arc<WriterOutput<Vec<u8>>>) {
        let logger = StdLogger::new(names);
        let output = Arc::new(WriterOutput::new(Vec::new()));
        logger
            .set_shared_output(output.clone())
            .set_formatter(|r: &Record<'_>| -> Result<Vec<u8>, crate::Error> {
                Ok(format!("{} [{}] {}\n", r.level, r.name, r.message).into_bytes())
            });
        (logger, output)
    }

    fn lines(output: &WriterOutput<Vec<u8>>) -> Vec<String> {
        output.with_inner(|buf| {
            String::from_utf8_lossy(buf)
                .lines()
                .map(str::to_string)
                .collect()
        })
    }

    #[test]
    fn defaults() {
        let logger = StdLogger::default();
        assert_eq!(logger.name(), "");
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.engine().hook_count(), 0);
    }

    #[test]
    fn records_carry_logger_name() {
        let (root, output) = captured(&["app"]);
        let http = root.sub(&["net", "http"]);
        http.info("up");
        root.warn("root");
        assert_eq!(lines(&output), vec!["info [app.net.http] up", "warn [app] root"]);
    }

    #[test]
    fn clone_keeps_name_but_not_level_coupling() {
        let (root, _) = captured(&["svc"]);
        let copy = root.clone();
        assert_eq!(copy.name(), "svc");

        copy.set_level(Level::Trace);
        assert_eq!(root.level(), Level::Info);
    }

    #[test]
    fn writer_logs_each_line() {
        let (root, output) = captured(&["io"]);
        {
            let mut w = root.writer_level(Level::Warn);
            w.write_all(b"first\nsecond\npartial").unwrap();
        }
        assert_eq!(
            lines(&output),
            vec!["warn [io] first", "warn [io] second", "warn [io] partial"]
        );
    }

    #[test]
    fn writer_respects_threshold() {
        let (root, output) = captured(&[]);
        root.set_level(Level::Error);
        let mut w = root.writer_level(Level::Debug);
        w.write_all(b"hidden\n").unwrap();
        w.flush().unwrap();
        assert!(lines(&output).is_empty());
    }

    #[test]
    fn writer_follows_later_level_changes() {
        let (root, output) = captured(&[]);
        let mut w = root.writer_level(Level::Info);
        root.set_level(Level::Error);
        w.write_all(b"after\n").unwrap();
        assert!(lines(&output).is_empty());
    }
}
