//! The discarding logger.

use hierlog::{Level, Logger, NopLogger};
use std::io::Write;
use std::sync::Arc;

#[test]
fn emission_has_no_effect() {
    let logger: Arc<dyn Logger> = Arc::new(NopLogger);
    for level in Level::all() {
        logger.log(level, "dropped");
        assert!(!logger.is_level_enabled(level));
    }
    hierlog::log_error!(logger, "{}", "dropped");
}

#[test]
fn derivation_stays_nop() {
    let logger = NopLogger::new();
    let child = logger.child(&["a", "b"]);
    child.set_level(Level::Trace);
    assert_eq!(child.name(), "");
    assert!(!child.is_level_enabled(Level::Error));
}

#[test]
fn writer_reports_full_length() {
    let mut w = NopLogger.writer_level(Level::Warn);
    let buf = b"some bytes\nmore";
    assert_eq!(w.write(buf).unwrap(), buf.len());
    w.flush().unwrap();
}
