//! The record handed to hooks and formatters.

use crate::level::Level;
use chrono::{DateTime, Local};

/// One emitted log entry. Borrowed from the emitting call; copy out what you need to keep.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    /// Dotted name of the emitting logger; empty for a root logger.
    pub name: &'a str,
    /// The fully rendered message.
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Stamps a record with the current local time.
    #[must_use]
    pub fn now(level: Level, name: &'a str, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            name,
            message,
        }
    }
}
