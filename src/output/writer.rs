//! Adapter for arbitrary `io::Write` sinks (buffers, sockets, pipes).

use super::Output;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Wraps any writer behind a mutex so it can serve as a shared [`Output`].
///
/// ```
/// use hierlog::output::{Output, WriterOutput};
///
/// let output = WriterOutput::new(Vec::new());
/// output.write(b"hello\n").unwrap();
/// assert_eq!(output.into_inner(), b"hello\n");
/// ```
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `f` with exclusive access to the wrapped writer.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        self.with_inner(|w| w.write_all(bytes))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.with_inner(|w| w.flush())?;
        Ok(())
    }
}
