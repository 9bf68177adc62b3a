//! Behavior and assertions of the in-memory logger.

use hierlog::testing::{PanicReporter, Recorder};
use hierlog::{Level, Logger, MemLogger};
use std::io::Write;
use std::sync::Arc;

fn log_twice_per_level(logger: &dyn Logger) {
    for level in Level::all() {
        logger.log(level, "message");
        logger.log_fmt(level, format_args!("{}", "message"));
    }
}

#[test]
fn every_level_is_captured() {
    let logger = MemLogger::new();
    log_twice_per_level(&logger);

    assert_eq!(logger.log_count(), 10);
    for level in Level::all() {
        assert_eq!(logger.logs(level), vec!["message", "message"], "{level}");
    }
}

#[test]
fn per_level_accessors() {
    let logger = MemLogger::new();
    logger.trace("t");
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    assert_eq!(logger.trace_logs(), vec!["t"]);
    assert_eq!(logger.debug_logs(), vec!["d"]);
    assert_eq!(logger.info_logs(), vec!["i"]);
    assert_eq!(logger.warn_logs(), vec!["w"]);
    assert_eq!(logger.error_logs(), vec!["e"]);
}

#[test]
fn clear_empties_the_store() {
    let logger = MemLogger::new();
    log_twice_per_level(&logger);
    logger.clear();

    assert_eq!(logger.log_count(), 0);
    assert!(logger.assert_no_logs(&PanicReporter, &Level::all()));
}

#[test]
fn level_threshold_is_ignored() {
    let logger = MemLogger::new();
    logger.set_level(Level::Error);
    assert_eq!(logger.level(), Level::Trace);
    assert!(logger.is_level_enabled(Level::Trace));
    logger.trace("kept");
    assert_eq!(logger.trace_logs(), vec!["kept"]);
}

#[test]
fn children_write_into_the_parent_store() {
    let logger = MemLogger::new();
    let root: Arc<dyn Logger> = Arc::new(logger.clone());
    let child = root.child(&["a"]).child(&["b"]);
    hierlog::log_warn!(child, "{} retries left", 3);

    assert_eq!(child.name(), "");
    assert_eq!(logger.warn_logs(), vec!["3 retries left"]);
}

#[test]
fn writer_level_captures_lines() {
    let logger = MemLogger::new();
    let mut w = logger.writer_level(Level::Debug);
    writeln!(w, "first").unwrap();
    write!(w, "sec").unwrap();
    write!(w, "ond").unwrap();
    w.flush().unwrap();

    assert_eq!(logger.debug_logs(), vec!["first", "second"]);
}

#[test]
fn all_messages_ignores_order() {
    let logger = MemLogger::new();
    logger.error("ghi");
    logger.error("abc");
    logger.error("def");

    let t = Recorder::new();
    assert!(logger.assert_all_messages(&t, Level::Error, &["abc", "def", "ghi"]));
    assert!(logger.assert_all_sub_messages(&t, Level::Error, &["a", "e", "i"]));
    t.assert_clean();
}

#[test]
fn all_messages_counts_duplicates() {
    let logger = MemLogger::new();
    logger.info("same");
    logger.info("same");

    let t = Recorder::new();
    assert!(!logger.assert_all_messages(&t, Level::Info, &["same"]));
    assert!(logger.assert_all_messages(&t, Level::Info, &["same", "same"]));
    assert_eq!(t.failures().len(), 1);
    assert!(t.failures()[0].contains("unexpected:\n    same"));
}

#[test]
fn all_messages_with_nothing_logged() {
    let logger = MemLogger::new();
    let t = Recorder::new();
    assert!(logger.assert_all_messages(&t, Level::Warn, &[]));
    assert!(!logger.assert_all_messages(&t, Level::Warn, &["expected"]));
    assert_eq!(
        t.failures(),
        vec!["Unexpected warn log messages\nmissing:\n    expected"]
    );
}

#[test]
fn sub_messages_pair_one_to_one() {
    let logger = MemLogger::new();
    logger.info("connection reset");

    let t = Recorder::new();
    assert!(!logger.assert_all_sub_messages(&t, Level::Info, &["conn", "reset"]));
    assert_eq!(t.failures().len(), 1);
}

#[test]
fn any_message_variants() {
    let logger = MemLogger::new();
    logger.warn("disk 91% full");
    logger.warn("retrying");

    let t = Recorder::new();
    assert!(logger.assert_any_message(&t, Level::Warn, "retrying"));
    assert!(logger.assert_any_sub_message(&t, Level::Warn, "91%"));
    t.assert_clean();

    assert!(!logger.assert_any_message(&t, Level::Warn, "retry"));
    assert!(!logger.assert_any_sub_message(&t, Level::Error, "disk"));
    let failures = t.failures();
    assert_eq!(failures.len(), 2);
    assert!(failures[0].contains("does not contain a warn message matching \"retry\""));
}

#[test]
fn no_warnings_checks_the_warn_level() {
    let logger = MemLogger::new();
    logger.error("an error");

    let t = Recorder::new();
    assert!(logger.assert_no_warnings(&t));
    assert!(!logger.assert_no_errors(&t));

    logger.warn("a warning");
    assert!(!logger.assert_no_warnings(&t));
    let failures = t.failures();
    assert_eq!(failures.len(), 2);
    assert!(failures[1].starts_with("Expected no warn logs, but got 1 message(s):"));
}

#[test]
fn no_logs_only_checks_listed_levels() {
    let logger = MemLogger::new();
    logger.debug("noise");
    let t = Recorder::new();
    assert!(logger.assert_no_logs(&t, &[Level::Info, Level::Warn, Level::Error]));
    assert!(!logger.assert_no_logs(&t, &[Level::Debug]));
}

#[test]
#[should_panic(expected = "does not contain a info message")]
fn panic_reporter_fails_fast() {
    let logger = MemLogger::new();
    logger.assert_any_message(&PanicReporter, Level::Info, "never logged");
}

#[test]
fn thousands_of_identical_messages() {
    let logger = MemLogger::new();
    for _ in 0..4000 {
        logger.info("heartbeat");
    }

    let t = Recorder::new();
    assert!(logger.assert_all_messages(&t, Level::Info, &["heartbeat"; 4000]));
    assert!(logger.assert_all_sub_messages(&t, Level::Info, &["beat"; 4000]));
    assert!(!logger.assert_all_messages(&t, Level::Info, &["heartbeat"; 3999]));
    assert_eq!(t.failures().len(), 1);
}
