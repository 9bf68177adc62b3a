//! In-memory logger for tests.

use super::{LineWriter, Logger};
use crate::level::Level;
use crate::testing::{Reporter, indent, match_elements, match_exact};

use std::collections::HashMap;
use std::fmt::Arguments;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Store = HashMap<Level, Vec<String>>;

/// Collects every message instead of writing it, so tests can assert on what was logged.
///
/// The logger is flat: children share the parent's store, have no name and always capture at
/// every level. [`Logger::set_level`] is ignored because tests need to see everything the code
/// under test emits, whatever threshold it configures.
///
/// Clones share the same store.
///
/// ```
/// use hierlog::{Level, Logger, MemLogger};
/// use hierlog::testing::Recorder;
///
/// let logger = MemLogger::new();
/// logger.error("disk full");
/// logger.child(&["worker"]).warn("retrying");
///
/// let t = Recorder::new();
/// logger.assert_all_messages(&t, Level::Error, &["disk full"]);
/// logger.assert_any_sub_message(&t, Level::Warn, "retry");
/// t.assert_clean();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemLogger {
    logs: Arc<Mutex<Store>>,
}

impl MemLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, level: Level, msg: String) {
        self.store().entry(level).or_default().push(msg);
    }

    pub fn clear(&self) {
        self.store().clear();
    }

    /// Total number of captured messages across all levels.
    #[must_use]
    pub fn log_count(&self) -> usize {
        self.store().values().map(Vec::len).sum()
    }

    /// Copy of the messages captured at `level`, in emission order.
    #[must_use]
    pub fn logs(&self, level: Level) -> Vec<String> {
        self.store().get(&level).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn trace_logs(&self) -> Vec<String> {
        self.logs(Level::Trace)
    }

    #[must_use]
    pub fn debug_logs(&self) -> Vec<String> {
        self.logs(Level::Debug)
    }

    #[must_use]
    pub fn info_logs(&self) -> Vec<String> {
        self.logs(Level::Info)
    }

    #[must_use]
    pub fn warn_logs(&self) -> Vec<String> {
        self.logs(Level::Warn)
    }

    #[must_use]
    pub fn error_logs(&self) -> Vec<String> {
        self.logs(Level::Error)
    }

    /// Reports every listed level that captured at least one message.
    ///
    /// Pass `&Level::all()` to verify that nothing was logged at all.
    ///
    /// # Panics
    /// If `levels` is empty: such a call can never fail and is always a broken test.
    pub fn assert_no_logs(&self, t: &impl Reporter, levels: &[Level]) -> bool {
        t.helper();
        assert!(!levels.is_empty(), "invalid usage: no levels provided");

        let reports: Vec<String> = {
            let store = self.store();
            levels
                .iter()
                .filter_map(|level| {
                    let logs = store.get(level).filter(|logs| !logs.is_empty())?;
                    Some(format!(
                        "Expected no {level} logs, but got {} message(s):\n{}",
                        logs.len(),
                        indent(&logs.join("\n"))
                    ))
                })
                .collect()
        };

        for report in &reports {
            t.errorf(format_args!("{report}"));
        }
        reports.is_empty()
    }

    pub fn assert_no_errors(&self, t: &impl Reporter) -> bool {
        t.helper();
        self.assert_no_logs(t, &[Level::Error])
    }

    pub fn assert_no_warnings(&self, t: &impl Reporter) -> bool {
        t.helper();
        self.assert_no_logs(t, &[Level::Warn])
    }

    /// Passes iff exactly `messages` were logged at `level`, in any order.
    ///
    /// Reports both missing and unexpected messages.
    pub fn assert_all_messages(&self, t: &impl Reporter, level: Level, messages: &[&str]) -> bool {
        t.helper();
        self.assert_elements(t, level, messages, Matching::Exact)
    }

    /// Like [`assert_all_messages`](Self::assert_all_messages), but each expected entry only has
    /// to be a substring of the message it is paired with. Pairing is one-to-one.
    pub fn assert_all_sub_messages(
        &self,
        t: &impl Reporter,
        level: Level,
        sub_messages: &[&str],
    ) -> bool {
        t.helper();
        self.assert_elements(t, level, sub_messages, Matching::Substring)
    }

    /// Passes if `message` was logged at `level` at least once.
    pub fn assert_any_message(&self, t: &impl Reporter, level: Level, message: &str) -> bool {
        t.helper();
        self.assert_any(t, level, message, |actual| actual == message)
    }

    /// Passes if at least one message at `level` contains `sub_message`.
    pub fn assert_any_sub_message(
        &self,
        t: &impl Reporter,
        level: Level,
        sub_message: &str,
    ) -> bool {
        t.helper();
        self.assert_any(t, level, sub_message, |actual| actual.contains(sub_message))
    }

    fn assert_elements(
        &self,
        t: &impl Reporter,
        level: Level,
        expected: &[&str],
        matching: Matching,
    ) -> bool {
        // The report is built under the lock and sent after it is released: a reporter may log.
        let report = {
            let store = self.store();
            let actual = store.get(&level).map_or(&[][..], Vec::as_slice);
            let mismatch = match matching {
                Matching::Exact => match_exact(expected, actual),
                Matching::Substring => {
                    match_elements(expected, actual, |wanted, actual| actual.contains(wanted))
                }
            };
            if mismatch.is_empty() {
                return true;
            }

            let mut report = format!("Unexpected {level} log messages");
            if !mismatch.missing.is_empty() {
                report.push_str("\nmissing:\n");
                report.push_str(&indent(&mismatch.missing.join("\n")));
            }
            if !mismatch.unexpected.is_empty() {
                report.push_str("\nunexpected:\n");
                report.push_str(&indent(&mismatch.unexpected.join("\n")));
            }
            report
        };
        t.errorf(format_args!("{report}"));
        false
    }

    fn assert_any(
        &self,
        t: &impl Reporter,
        level: Level,
        wanted: &str,
        matches: impl Fn(&str) -> bool,
    ) -> bool {
        let actual = {
            let store = self.store();
            let actual = store.get(&level).map_or(&[][..], Vec::as_slice);
            if actual.iter().any(|msg| matches(msg.as_str())) {
                return true;
            }
            format!("{actual:?}")
        };
        t.errorf(format_args!(
            "{actual} does not contain a {level} message matching {wanted:?}"
        ));
        false
    }
}

#[derive(Debug, Clone, Copy)]
enum Matching {
    Exact,
    Substring,
}

impl Logger for MemLogger {
    fn child(&self, _names: &[&str]) -> Arc<dyn Logger> {
        Arc::new(self.clone())
    }

    fn name(&self) -> &str {
        ""
    }

    fn level(&self) -> Level {
        Level::Trace
    }

    fn set_level(&self, _level: Level) {}

    fn is_level_enabled(&self, _level: Level) -> bool {
        true
    }

    fn writer_level(&self, level: Level) -> Box<dyn io::Write + Send> {
        let logger = self.clone();
        Box::new(LineWriter::new(move |line: &str| {
            logger.push(level, line.to_string());
        }))
    }

    fn log_fmt(&self, level: Level, args: Arguments<'_>) {
        // Render before locking; Display impls may be slow or log themselves.
        let msg = args.to_string();
        self.push(level, msg);
    }

    fn log(&self, level: Level, msg: &str) {
        self.push(level, msg.to_string());
    }
}
