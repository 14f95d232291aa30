//! Failure reporting boundary
//!
//! A [`FailureReporter`] receives the first mismatch of a match call and
//! decides whether to raise, record or ignore it. Closures with the signature
//! `FnMut(&Value, Option<&Value>, &str)` are reporters.

use crate::error::{MatchError, MatchResult, Mismatch};
use crate::value::Value;

/// Receiver for the first mismatch of a match call
pub trait FailureReporter {
    /// Called at most once per top-level match call
    fn report(&mut self, expected: &Value, actual: Option<&Value>, message: &str);
}

impl<F> FailureReporter for F
where
    F: FnMut(&Value, Option<&Value>, &str),
{
    fn report(&mut self, expected: &Value, actual: Option<&Value>, message: &str) {
        self(expected, actual, message);
    }
}

/// Reporter that ignores every mismatch
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl FailureReporter for Silent {
    fn report(&mut self, _expected: &Value, _actual: Option<&Value>, _message: &str) {}
}

/// Reporter that keeps the reported mismatch
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    failures: Vec<(Value, Option<Value>, String)>,
}

impl Recorder {
    /// Create empty recorder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(expected, actual, message)` triples
    #[inline]
    #[must_use]
    pub fn failures(&self) -> &[(Value, Option<Value>, String)] {
        &self.failures
    }

    /// Message of the most recent failure
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.failures.last().map(|(_, _, message)| message.as_str())
    }
}

impl FailureReporter for Recorder {
    fn report(&mut self, expected: &Value, actual: Option<&Value>, message: &str) {
        self.failures
            .push((expected.clone(), actual.cloned(), message.to_string()));
    }
}

/// Route a mismatch to `reporter`, leaving hard errors in place.
///
/// `Ok(true)` means matched, `Ok(false)` means a mismatch was reported.
///
/// # Errors
/// Returns every error that is not a [`Mismatch`].
pub fn dispatch<R>(result: MatchResult, reporter: &mut R) -> MatchResult<bool>
where
    R: FailureReporter + ?Sized,
{
    match result {
        Ok(()) => Ok(true),
        Err(MatchError::Mismatch(mismatch)) => {
            let Mismatch {
                expected,
                actual,
                message,
                ..
            } = *mismatch;
            reporter.report(&expected, actual.as_ref(), &message);
            Ok(false)
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::MatchPath;

    #[test]
    fn dispatch_success_does_not_report() {
        let mut called = false;
        let matched = dispatch(Ok(()), &mut |_: &Value, _: Option<&Value>, _: &str| {
            called = true;
        })
        .unwrap();
        assert!(matched);
        assert!(!called);
    }

    #[test]
    fn dispatch_mismatch_reports_once() {
        let mut recorder = Recorder::new();
        let mismatch = Mismatch::missing(MatchPath::single("baz"), &Value::from(42));
        let matched = dispatch(Err(mismatch.into()), &mut recorder).unwrap();
        assert!(!matched);
        assert_eq!(recorder.failures().len(), 1);
        assert_eq!(recorder.last_message(), Some("Given value has no key `baz`"));
        assert_eq!(recorder.failures()[0].0, Value::from(42));
        assert!(recorder.failures()[0].1.is_none());
    }

    #[test]
    fn dispatch_keeps_hard_errors() {
        let err = MatchError::DepthExceeded { limit: 1 };
        let result = dispatch(Err(err), &mut Silent);
        assert!(matches!(result, Err(MatchError::DepthExceeded { limit: 1 })));
    }
}
