//! Destinations for rendered log lines. The engine hands every formatted record to exactly one
//! `Output`; implement the trait to send lines anywhere else.

mod file;
mod terminal;
mod writer;

pub use file::FileOutput;
pub use terminal::TerminalOutput;
pub use writer::WriterOutput;

/// `Send + Sync` so one output can be shared by every logger derived from the same root.
pub trait Output: Send + Sync {
    /// Writes one already-formatted record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stderr, file, custom writer).
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error>;

    /// Pushes buffered bytes to the sink.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
