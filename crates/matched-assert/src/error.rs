//! Assertion failure type

use crate::diff::leaf_diff;
use matched_core::{MatchError, Value};

/// Why a constraint rejected its subject
#[derive(Debug, thiserror::Error)]
pub enum AssertionFailure {
    /// Subject does not match the pattern
    #[error("{message}\n{diff}")]
    Mismatch {
        /// Path-qualified mismatch message
        message: String,
        /// Unified diff of the two leaves
        diff: String,
    },

    /// Pattern or subject could not be evaluated at all
    #[error("invalid input: {0}")]
    Invalid(#[from] MatchError),
}

impl AssertionFailure {
    /// Create mismatch failure with a leaf diff
    #[must_use]
    pub fn mismatch(message: &str, expected: &Value, actual: Option<&Value>) -> Self {
        Self::Mismatch {
            message: message.to_string(),
            diff: leaf_diff(expected, actual),
        }
    }

    /// Check if failure is a mismatch rather than bad input
    #[inline]
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}
