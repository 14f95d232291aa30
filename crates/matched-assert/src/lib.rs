//! matched assertions
//!
//! Test-framework adapters over `matched-core`. A constraint turns the first
//! mismatch into an [`AssertionFailure`] carrying the path-qualified message
//! and a unified diff of the two leaves.
//!
//! # Example
//!
//! ```rust
//! use matched_assert::{assert_json_matches, Constraint, JsonConstraint};
//!
//! assert_json_matches!(r#"{"id": "user-***"}"#, r#"{"id": "user-7", "n": 1}"#);
//!
//! let constraint = JsonConstraint::new(r#"{"id": "user-***"}"#);
//! let failure = constraint.evaluate(r#"{"id": "admin"}"#).unwrap_err();
//! assert!(failure.to_string().contains("--- Pattern\n+++ Actual"));
//! ```

pub mod constraint;
pub mod diff;
pub mod error;

// Re-exports for convenience
pub use constraint::{Constraint, JsonConstraint, ValueConstraint};
pub use diff::{leaf_diff, render_leaf};
pub use error::AssertionFailure;

/// Assert that JSON text matches a JSON pattern
///
/// Panics with the mismatch message and leaf diff on failure.
#[macro_export]
macro_rules! assert_json_matches {
    ($pattern:expr, $actual:expr $(,)?) => {
        $crate::assert_json_matches!($pattern, $actual, "Failed asserting that json matched pattern")
    };
    ($pattern:expr, $actual:expr, $($arg:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::Constraint::evaluate(&$crate::JsonConstraint::new($pattern), $actual)
        {
            ::core::panic!("{}\n{}", ::core::format_args!($($arg)+), failure);
        }
    };
}

/// Assert that a value matches a pattern value
///
/// Panics with the mismatch message and leaf diff on failure.
#[macro_export]
macro_rules! assert_value_matches {
    ($pattern:expr, $actual:expr $(,)?) => {
        $crate::assert_value_matches!($pattern, $actual, "Failed asserting that value matched pattern")
    };
    ($pattern:expr, $actual:expr, $($arg:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::Constraint::evaluate(&$crate::ValueConstraint::new($pattern), $actual)
        {
            ::core::panic!("{}\n{}", ::core::format_args!($($arg)+), failure);
        }
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
