//! matched core
//!
//! Structural pattern matching with wildcards and default annotations.
//!
//! # Core Concepts
//!
//! - [`Value`]: closed tagged variant over scalars, sequences and ordered maps
//! - [`WildcardPattern`]: pattern string split into literals, wildcard tokens
//!   (`***`) and default annotations (`**>text<**`)
//! - [`Matcher`]: recursive, superset-tolerant matching with first-failure
//!   reporting by [`MatchPath`]
//! - Default rendering: turn a pattern into a concrete example value
//!
//! # Example
//!
//! ```rust
//! use matched_core::Matcher;
//!
//! let matcher = Matcher::default();
//!
//! let result = matcher.match_json(
//!     r#"{"id": "user-***", "tags": ["***"]}"#,
//!     r#"{"id": "user-42", "tags": [{"k": 1}], "extra": true}"#,
//! );
//! assert!(result.is_ok());
//!
//! let example = matcher.render_default_json(r#"{"id": "user-**>1<**"}"#).unwrap();
//! assert_eq!(example, "{\n    \"id\": \"user-1\"\n}");
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod json;
pub mod path;
pub mod report;
pub mod structural;
pub mod value;
pub mod wildcard;

// Re-exports for convenience
pub use config::{MatchConfig, DEFAULT_CLOSE, DEFAULT_MAX_DEPTH, DEFAULT_OPEN, DEFAULT_TOKEN};
pub use error::{ConfigError, MatchError, MatchResult, Mismatch, MismatchKind, Side};
pub use path::{MatchPath, PathSegment};
pub use report::{FailureReporter, Recorder, Silent};
pub use structural::Matcher;
pub use value::{Map, Value};
pub use wildcard::{Piece, WildcardPattern};

/// Match `pattern` against `actual` with the default configuration
///
/// # Errors
/// See [`Matcher::match_value`].
pub fn match_value(pattern: &Value, actual: &Value) -> MatchResult {
    Matcher::default().match_value(pattern, actual)
}

/// Match JSON texts with the default configuration
///
/// # Errors
/// See [`Matcher::match_json`].
pub fn match_json(pattern: &str, actual: &str) -> MatchResult {
    Matcher::default().match_json(pattern, actual)
}

/// Default text of a pattern string with the default markers
#[must_use]
pub fn default_string(pattern: &str) -> String {
    Matcher::default().render_default_str(pattern)
}

/// Default value of a pattern with the default markers
///
/// # Errors
/// See [`Matcher::render_default`].
pub fn default_value(pattern: &Value) -> MatchResult<Value> {
    Matcher::default().render_default(pattern)
}

/// Default JSON document of a pattern with the default markers
///
/// # Errors
/// See [`Matcher::render_default_json`].
pub fn default_json(pattern: &str) -> MatchResult<String> {
    Matcher::default().render_default_json(pattern)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for matching
    pub use crate::{
        FailureReporter, MatchConfig, MatchError, MatchPath, MatchResult, Matcher, Mismatch,
        MismatchKind, Value,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
