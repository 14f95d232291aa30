//! Assertion constraints
//!
//! A [`Constraint`] wraps a pattern and evaluates subjects against it, either
//! raising an [`AssertionFailure`] or answering with a plain boolean.

use crate::error::AssertionFailure;
use matched_core::{MatchError, Matcher, Silent, Value};

/// Pattern-backed assertion
pub trait Constraint {
    /// Type of value the constraint is evaluated against
    type Subject: ?Sized;

    /// Evaluate `other`, failing with a message and leaf diff on mismatch
    ///
    /// # Errors
    /// Returns [`AssertionFailure::Mismatch`] on the first mismatch, or
    /// [`AssertionFailure::Invalid`] if evaluation itself fails.
    fn evaluate(&self, other: &Self::Subject) -> Result<(), AssertionFailure>;

    /// Evaluate `other` without raising on mismatch
    ///
    /// # Errors
    /// Returns malformed input and other hard errors.
    fn check(&self, other: &Self::Subject) -> Result<bool, MatchError>;

    /// Human-readable description of the constraint
    fn describe(&self) -> String;
}

/// Collects the reported mismatch as an [`AssertionFailure`]
#[derive(Default)]
struct Raise {
    failure: Option<AssertionFailure>,
}

impl Raise {
    fn report(&mut self, expected: &Value, actual: Option<&Value>, message: &str) {
        self.failure = Some(AssertionFailure::mismatch(message, expected, actual));
    }

    fn finish(self, constraint: &str) -> Result<(), AssertionFailure> {
        match self.failure {
            Some(failure) => {
                tracing::debug!(constraint, "assertion failed");
                Err(failure)
            }
            None => Ok(()),
        }
    }
}

/// Constraint over an in-memory [`Value`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValueConstraint {
    pattern: Value,
    matcher: Matcher,
}

impl ValueConstraint {
    /// Create constraint with the default matcher
    #[must_use]
    pub fn new(pattern: impl Into<Value>) -> Self {
        Self {
            pattern: pattern.into(),
            matcher: Matcher::default(),
        }
    }

    /// With a custom matcher (token or markers)
    #[inline]
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Pattern value
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Value {
        &self.pattern
    }
}

impl Constraint for ValueConstraint {
    type Subject = Value;

    fn evaluate(&self, other: &Value) -> Result<(), AssertionFailure> {
        let mut raise = Raise::default();
        self.matcher.match_value_with(
            &self.pattern,
            other,
            &mut |expected: &Value, actual: Option<&Value>, message: &str| {
                raise.report(expected, actual, message);
            },
        )?;
        raise.finish(&self.describe())
    }

    fn check(&self, other: &Value) -> Result<bool, MatchError> {
        self.matcher.match_value_with(&self.pattern, other, &mut Silent)
    }

    fn describe(&self) -> String {
        format!("matches value `{}`", self.pattern)
    }
}

/// Constraint over JSON text
#[derive(Debug, Clone, PartialEq)]
pub struct JsonConstraint {
    pattern: String,
    matcher: Matcher,
}

impl JsonConstraint {
    /// Create constraint with the default matcher
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            matcher: Matcher::default(),
        }
    }

    /// With a custom matcher (token or markers)
    #[inline]
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Pattern text
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Constraint for JsonConstraint {
    type Subject = str;

    fn evaluate(&self, other: &str) -> Result<(), AssertionFailure> {
        let mut raise = Raise::default();
        self.matcher.match_json_with(
            &self.pattern,
            other,
            &mut |expected: &Value, actual: Option<&Value>, message: &str| {
                raise.report(expected, actual, message);
            },
        )?;
        raise.finish(&self.describe())
    }

    fn check(&self, other: &str) -> Result<bool, MatchError> {
        self.matcher.match_json_with(&self.pattern, other, &mut Silent)
    }

    fn describe(&self) -> String {
        format!("matches JSON string `{}`", self.pattern)
    }
}
