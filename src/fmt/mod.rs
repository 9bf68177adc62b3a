//! Formatters turn a [`Record`] into the bytes an output writes.

mod color;
mod console;
mod json;
mod text;

pub use color::{Color, colorize};
pub use console::ConsoleFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::engine::Record;

/// Renders one record. Implementations should end the line themselves.
///
/// Closures with the matching signature are formatters too:
///
/// ```
/// use hierlog::engine::Record;
/// use hierlog::fmt::Formatter;
/// use hierlog::Level;
///
/// let plain = |record: &Record<'_>| -> Result<Vec<u8>, hierlog::Error> {
///     Ok(format!("{}\n", record.message).into_bytes())
/// };
/// let bytes = plain.format(&Record::now(Level::Info, "", "hi")).unwrap();
/// assert_eq!(bytes, b"hi\n");
/// ```
pub trait Formatter: Send + Sync {
    /// # Errors
    /// Rendering failures; the engine reports them and drops the record.
    fn format(&self, record: &Record<'_>) -> Result<Vec<u8>, crate::Error>;
}

impl<F> Formatter for F
where
    F: Fn(&Record<'_>) -> Result<Vec<u8>, crate::Error> + Send + Sync,
{
    fn format(&self, record: &Record<'_>) -> Result<Vec<u8>, crate::Error> {
        self(record)
    }
}

/// Right-aligns `s` in a column of `width` chars, keeping only the last `width` chars of longer
/// input so the tail of a long dotted name stays visible.
#[must_use]
pub fn trim_pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.chars().skip(len - width).collect()
    } else {
        format!("{s:>width$}")
    }
}
