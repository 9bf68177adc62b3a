//! Tests for log level functionality.

use hierlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn less_severe_than_is_strict() {
    for a in Level::all() {
        assert!(!a.less_severe_than(a));
        for b in Level::all() {
            assert_eq!(a.less_severe_than(b), a.rank() < b.rank(), "{a} vs {b}");
        }
    }
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn display_parses_back() {
    for level in Level::all() {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
}

#[test]
fn level_from_str_invalid() {
    for input in ["", " error", "e", "err", "fatal"] {
        let err = input.parse::<Level>().unwrap_err();
        assert_eq!(err.input(), input);
    }
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
