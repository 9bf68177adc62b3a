//! Hooks are called synchronously for every record whose level they registered for.

use super::Record;
use crate::level::Level;
use std::fmt;

/// Side-effecting callback notified of emitted records.
///
/// Hooks run on the emitting thread before the record is written, so they must not block for
/// long. A returned error is reported by the engine; the record is still written and the
/// remaining hooks still fire.
///
/// Closures implement this trait; annotate the argument so the record lifetime stays generic:
///
/// ```
/// use hierlog::engine::{Hook, Record};
///
/// let hook = |record: &Record<'_>| -> Result<(), hierlog::Error> {
///     assert!(!record.message.is_empty());
///     Ok(())
/// };
/// fn takes_hook(_: impl Hook) {}
/// takes_hook(hook);
/// ```
pub trait Hook: Send + Sync {
    /// Handles one record.
    ///
    /// # Errors
    /// Any failure; it is reported, never propagated to the emitting caller.
    fn fire(&self, record: &Record<'_>) -> Result<(), crate::Error>;
}

impl<F> Hook for F
where
    F: Fn(&Record<'_>) -> Result<(), crate::Error> + Send + Sync,
{
    fn fire(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        self(record)
    }
}

/// A hook together with the levels it fires for. Immutable once installed.
pub struct LevelHook {
    levels: Vec<Level>,
    hook: Box<dyn Hook>,
}

impl LevelHook {
    pub fn new(levels: &[Level], hook: impl Hook + 'static) -> Self {
        Self {
            levels: levels.to_vec(),
            hook: Box::new(hook),
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn fires_for(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }

    /// # Errors
    /// Whatever the wrapped hook returns.
    pub fn fire(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        self.hook.fire(record)
    }
}

impl fmt::Debug for LevelHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelHook")
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}
