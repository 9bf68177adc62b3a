//! Hierlog's own diagnostics.
//!
//! The engine cannot log its own failures through the output that just failed, so hook,
//! formatter and sink errors go straight to stderr. Reporting is best-effort: if stderr itself
//! is broken the report is dropped, never escalated into a panic.

use std::io::{self, Write};

const PREFIX: &str = "hierlog";

/// Reports a failure that happened while handling a record.
pub fn report(context: &str, err: &dyn std::fmt::Display) {
    let _ = writeln!(io::stderr().lock(), "{}", render(context, err));
}

/// The line [`report`] writes.
#[must_use]
pub fn render(context: &str, err: &dyn std::fmt::Display) -> String {
    format!("{PREFIX}: {context}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_context_and_error() {
        let err = crate::Error::hook("tracker offline");
        assert_eq!(
            render("failed to fire hook", &err),
            "hierlog: failed to fire hook: hook error: tracker offline"
        );
    }
}
