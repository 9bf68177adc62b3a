//! Standard stream output. Stderr is the engine's default destination.

use super::Output;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes records to stdout or stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOutput {
    stream: Stream,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

impl TerminalOutput {
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// `true` when this output targets stderr.
    #[must_use]
    pub fn is_stderr(&self) -> bool {
        self.stream == Stream::Stderr
    }
}

impl Output for TerminalOutput {
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        // Lock once so concurrent records never interleave within a line.
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(bytes)?,
            Stream::Stderr => io::stderr().lock().write_all(bytes)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
