//! Reporters for [`MemLogger`](crate::MemLogger) assertions, and the matching they use.
//!
//! Assertions never panic on a mismatch. They describe the failure through a [`Reporter`] and
//! return `false`, so one test can collect several failures before giving up.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Test-failure sink, modeled on the usual `Errorf`/`Helper` pair of test harnesses.
pub trait Reporter {
    /// Records one failure.
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Marks the calling function as a helper. Harnesses without call-site tracking ignore it.
    fn helper(&self) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args);
    }

    fn helper(&self) {
        (**self).helper();
    }
}

/// Collects failures for inspection; call [`Recorder::assert_clean`] at the end of a test.
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<String>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// # Panics
    /// If any failure was recorded; the message lists all of them.
    #[track_caller]
    pub fn assert_clean(&self) {
        let failures = self.failures();
        assert!(
            failures.is_empty(),
            "{} assertion(s) failed:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

impl Reporter for Recorder {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args.to_string());
    }
}

/// Panics on the first failure; the simplest choice inside a plain `#[test]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        panic!("{args}");
    }
}

/// Indents every line of `text` by four spaces.
#[must_use]
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of pairing expected entries with actual ones.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Mismatch<'a> {
    /// Expected entries without a partner.
    pub missing: Vec<&'a str>,
    /// Actual entries without a partner.
    pub unexpected: Vec<&'a str>,
}

impl Mismatch<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Multiset comparison for exact matches: each expected entry consumes one equal actual entry.
pub fn match_exact<'a>(expected: &[&'a str], actual: &'a [String]) -> Mismatch<'a> {
    let mut pending: HashMap<&'a str, usize> = HashMap::new();
    for e in expected {
        *pending.entry(*e).or_default() += 1;
    }

    let mut unexpected = Vec::new();
    for a in actual {
        match pending.get_mut(a.as_str()) {
            Some(n) if *n > 0 => *n -= 1,
            _ => unexpected.push(a.as_str()),
        }
    }

    let mut missing = Vec::new();
    for e in expected {
        if let Some(n) = pending.get_mut(e)
            && *n > 0
        {
            *n -= 1;
            missing.push(*e);
        }
    }

    Mismatch {
        missing,
        unexpected,
    }
}

/// Pairs each expected entry with a distinct actual entry such that `matches(expected, actual)`
/// holds, maximizing the number of pairs. Whatever stays unpaired on either side is reported.
///
/// Entries first take the first free candidate; only those left over search for an augmenting
/// path, so an early greedy choice never hides a valid overall pairing.
pub fn match_elements<'a>(
    expected: &[&'a str],
    actual: &'a [String],
    matches: impl Fn(&str, &str) -> bool,
) -> Mismatch<'a> {
    let mut pairs = Pairing {
        owner: vec![None; actual.len()],
        partner: vec![None; expected.len()],
    };

    for (e, &wanted) in expected.iter().enumerate() {
        let free = (0..actual.len())
            .find(|&a| pairs.owner[a].is_none() && matches(wanted, actual[a].as_str()));
        if let Some(a) = free {
            pairs.pair(e, a);
        }
    }

    for e in 0..expected.len() {
        if pairs.partner[e].is_none() {
            pairs.augment(e, expected, actual, &matches);
        }
    }

    Mismatch {
        missing: expected
            .iter()
            .zip(&pairs.partner)
            .filter(|(_, p)| p.is_none())
            .map(|(e, _)| *e)
            .collect(),
        unexpected: actual
            .iter()
            .zip(&pairs.owner)
            .filter(|(_, o)| o.is_none())
            .map(|(a, _)| a.as_str())
            .collect(),
    }
}

struct Pairing {
    /// `owner[a]`: expected entry paired with `actual[a]`.
    owner: Vec<Option<usize>>,
    /// `partner[e]`: actual entry paired with `expected[e]`.
    partner: Vec<Option<usize>>,
}

impl Pairing {
    fn pair(&mut self, e: usize, a: usize) {
        self.owner[a] = Some(e);
        self.partner[e] = Some(a);
    }

    /// Breadth-first search for an alternating path from the unpaired `start` to a free actual
    /// entry; flips the path if one exists.
    fn augment(
        &mut self,
        start: usize,
        expected: &[&str],
        actual: &[String],
        matches: &impl Fn(&str, &str) -> bool,
    ) -> bool {
        // reached_from[a] = expected entry through which actual[a] was reached
        let mut reached_from: Vec<Option<usize>> = vec![None; actual.len()];
        let mut queue = VecDeque::from([start]);

        while let Some(e) = queue.pop_front() {
            for a in 0..actual.len() {
                if reached_from[a].is_some() || !matches(expected[e], actual[a].as_str()) {
                    continue;
                }
                reached_from[a] = Some(e);
                match self.owner[a] {
                    Some(next) => queue.push_back(next),
                    None => {
                        self.flip(a, &reached_from);
                        return true;
                    }
                }
            }
        }
        false
    }

    fn flip(&mut self, free: usize, reached_from: &[Option<usize>]) {
        let mut a = free;
        while let Some(e) = reached_from[a] {
            let previous = self.partner[e];
            self.pair(e, a);
            match previous {
                Some(p) => a = p,
                None => break,
            }
        }
    }
}
