//! Error types for the matching engine
//!
//! Separates the three outcomes a caller has to tell apart:
//! - Recoverable mismatches ([`Mismatch`]), reported once per match call
//! - Malformed input (JSON that fails to decode)
//! - Hard limits and configuration problems

use crate::path::MatchPath;
use crate::value::Value;
use std::fmt;

/// Which side of a match an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The pattern document
    Pattern,
    /// The actual document
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => f.write_str("pattern"),
            Self::Actual => f.write_str("actual"),
        }
    }
}

/// Classification of a structural mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// Same shape, different value (or wildcard text not satisfied)
    ValueMismatch,
    /// Pattern requires a key or index the actual container lacks
    MissingKey,
    /// Pattern and actual have incompatible shapes or scalar types
    ShapeMismatch,
}

/// First mismatch found while matching a pattern against an actual value
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Location of the mismatch, outermost segment first
    pub path: MatchPath,
    /// Pattern leaf at `path`
    pub expected: Value,
    /// Actual leaf at `path`, `None` when the actual value has nothing there
    pub actual: Option<Value>,
    /// Mismatch classification
    pub kind: MismatchKind,
    /// Human-readable description
    pub message: String,
}

impl Mismatch {
    /// Mismatch between a pattern leaf and the actual value at `path`
    #[must_use]
    pub fn value(path: MatchPath, expected: &Value, actual: &Value, kind: MismatchKind) -> Self {
        let message = format!(
            "Given value of `{path}` not match pattern `{}`",
            expected.pattern_text()
        );
        Self {
            path,
            expected: expected.clone(),
            actual: Some(actual.clone()),
            kind,
            message,
        }
    }

    /// Pattern requires `path`, but the actual container has no such entry
    #[must_use]
    pub fn missing(path: MatchPath, expected: &Value) -> Self {
        let message = format!("Given value has no key `{path}`");
        Self {
            path,
            expected: expected.clone(),
            actual: None,
            kind: MismatchKind::MissingKey,
            message,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A marker string is empty
    #[error("{0} must not be empty")]
    EmptyMarker(&'static str),

    /// Open and close default markers are the same string
    #[error("default annotation markers must differ, both are '{0}'")]
    IdenticalMarkers(String),

    /// Wildcard token collides with a default annotation marker
    #[error("wildcard token '{0}' collides with a default annotation marker")]
    TokenCollision(String),

    /// Maximum depth of zero would reject every pattern
    #[error("max_depth must be at least 1")]
    ZeroDepth,

    /// TOML source could not be decoded
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors produced by the matching engine
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Actual value does not conform to the pattern
    #[error("{0}")]
    Mismatch(Box<Mismatch>),

    /// Pattern or actual text is not valid JSON
    #[error("malformed {side} JSON: {source}")]
    MalformedJson {
        /// Which input failed to decode
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    /// Default value could not be encoded
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// Pattern nesting exceeded the configured recursion limit
    #[error("pattern nesting exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Configured `max_depth`
        limit: usize,
    },

    /// Matcher configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MatchError {
    /// Create malformed JSON error for one side
    #[inline]
    pub fn malformed(side: Side, source: serde_json::Error) -> Self {
        Self::MalformedJson { side, source }
    }

    /// Check if error is a recoverable mismatch
    #[inline]
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }

    /// Extract the mismatch, if this is one
    #[inline]
    #[must_use]
    pub fn into_mismatch(self) -> Option<Mismatch> {
        match self {
            Self::Mismatch(mismatch) => Some(*mismatch),
            _ => None,
        }
    }
}

impl From<Mismatch> for MatchError {
    fn from(mismatch: Mismatch) -> Self {
        Self::Mismatch(Box::new(mismatch))
    }
}

/// Result type alias for matching operations
pub type MatchResult<T = ()> = Result<T, MatchError>;
