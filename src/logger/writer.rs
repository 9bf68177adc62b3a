//! Byte-stream adapter behind [`Logger::writer_level`](super::Logger::writer_level).

use std::fmt;
use std::io;

/// Splits written bytes into lines and hands each line to `emit`.
///
/// `\r\n` endings are accepted, invalid UTF-8 is replaced. A trailing partial line is emitted
/// on [`flush`](io::Write::flush) and on drop, so nothing written is lost.
pub struct LineWriter<F: FnMut(&str)> {
    buf: Vec<u8>,
    emit: F,
}

impl<F: FnMut(&str)> LineWriter<F> {
    pub const fn new(emit: F) -> Self {
        Self {
            buf: Vec::new(),
            emit,
        }
    }

    fn emit_line(&mut self, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        (self.emit)(&String::from_utf8_lossy(line));
    }

    fn emit_complete_lines(&mut self) {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop();
            self.emit_line(&line);
        }
    }

    fn emit_partial(&mut self) {
        if !self.buf.is_empty() {
            let line = std::mem::take(&mut self.buf);
            self.emit_line(&line);
        }
    }
}

impl<F: FnMut(&str)> io::Write for LineWriter<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        self.emit_complete_lines();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit_partial();
        Ok(())
    }
}

impl<F: FnMut(&str)> Drop for LineWriter<F> {
    fn drop(&mut self) {
        self.emit_partial();
    }
}

impl<F: FnMut(&str)> fmt::Debug for LineWriter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("buffered", &self.buf.len())
            .finish_non_exhaustive()
    }
}
