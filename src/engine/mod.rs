//! The backend every [`StdLogger`](crate::StdLogger) delegates to: a level threshold plus the
//! output, formatter and hooks a record flows through.
//!
//! Emission order is fixed: gate by threshold, fire matching hooks in installation order,
//! format, write. Failures after the gate are reported on stderr and never reach the caller.

mod hook;
mod record;

pub use hook::{Hook, LevelHook};
pub use record::Record;

use crate::fmt::{Formatter, TextFormatter};
use crate::internal;
use crate::level::Level;
use crate::output::{Output, TerminalOutput};

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Everything a record needs after it passed the threshold. Cloning only bumps refcounts.
#[derive(Clone)]
struct Dispatch {
    output: Arc<dyn Output>,
    formatter: Arc<dyn Formatter>,
    /// Replaced wholesale on `add_hook`; installed hooks are shared, never mutated.
    hooks: Arc<[Arc<LevelHook>]>,
}

/// A single engine instance. Derived loggers get their own instance via [`Engine::fork`].
pub struct Engine {
    level: AtomicU8,
    dispatch: RwLock<Dispatch>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Info threshold, stderr output, [`TextFormatter`], no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: AtomicU8::new(Level::default().rank()),
            dispatch: RwLock::new(Dispatch {
                output: Arc::new(TerminalOutput::stderr()),
                formatter: Arc::new(TextFormatter::new()),
                hooks: Arc::from(Vec::new()),
            }),
        }
    }

    /// Copies the current configuration into a fresh, independent engine.
    ///
    /// Output, formatter and installed hooks are shared with `self`; the threshold and the hook
    /// list are the new engine's own, so later changes on either side stay local.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            level: AtomicU8::new(self.level.load(Ordering::Relaxed)),
            dispatch: RwLock::new(self.snapshot()),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_rank(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// `false` for records that would be dropped at the gate.
    #[must_use]
    pub fn is_level_enabled(&self, level: Level) -> bool {
        !level.less_severe_than(self.level())
    }

    #[must_use]
    pub fn output(&self) -> Arc<dyn Output> {
        Arc::clone(&self.snapshot().output)
    }

    pub fn set_output(&self, output: Arc<dyn Output>) {
        self.write_dispatch(|d| d.output = output);
    }

    #[must_use]
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.snapshot().formatter)
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.write_dispatch(|d| d.formatter = formatter);
    }

    /// Installs `hook` for the given levels. Engines forked earlier are not affected.
    pub fn add_hook(&self, hook: LevelHook) {
        let hook = Arc::new(hook);
        self.write_dispatch(|d| {
            let mut hooks = d.hooks.to_vec();
            hooks.push(hook);
            d.hooks = Arc::from(hooks);
        });
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.snapshot().hooks.len()
    }

    /// Emits a record tagged with `name`. Never fails; see the module docs.
    pub fn log(&self, level: Level, name: &str, args: fmt::Arguments<'_>) {
        if !self.is_level_enabled(level) {
            return;
        }

        match args.as_str() {
            Some(message) => self.emit(level, name, message),
            None => self.emit(level, name, &args.to_string()),
        }
    }

    /// Flushes the output, reporting rather than returning failures.
    pub fn flush(&self) {
        if let Err(e) = self.snapshot().output.flush() {
            internal::report("failed to flush output", &e);
        }
    }

    fn emit(&self, level: Level, name: &str, message: &str) {
        // Snapshot, then release the lock: hooks may log through this same engine.
        let dispatch = self.snapshot();
        let record = Record::now(level, name, message);

        for hook in dispatch.hooks.iter().filter(|h| h.fires_for(level)) {
            if let Err(e) = hook.fire(&record) {
                internal::report("failed to fire hook", &e);
            }
        }

        let bytes = match dispatch.formatter.format(&record) {
            Ok(bytes) => bytes,
            Err(e) => {
                internal::report("failed to format record", &e);
                return;
            }
        };

        if let Err(e) = dispatch.output.write(&bytes) {
            internal::report("failed to write to log", &e);
        }
    }

    fn snapshot(&self) -> Dispatch {
        self.dispatch
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_dispatch(&self, f: impl FnOnce(&mut Dispatch)) {
        let mut dispatch = self
            .dispatch
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut dispatch);
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("level", &self.level())
            .field("hooks", &self.hook_count())
            .finish_non_exhaustive()
    }
}
