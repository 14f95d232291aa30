//! Matcher configuration
//!
//! The wildcard token and the default-annotation markers are plain strings
//! carried in a [`MatchConfig`] and passed explicitly to every match, so tests
//! can swap markers without touching shared state.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default wildcard token
pub const DEFAULT_TOKEN: &str = "***";

/// Default opening marker of a default annotation
pub const DEFAULT_OPEN: &str = "**>";

/// Default closing marker of a default annotation
pub const DEFAULT_CLOSE: &str = "<**";

/// Default recursion limit for structural matching
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Marker that matches any substring
    pub token: String,
    /// Opening marker of a default annotation
    pub default_open: String,
    /// Closing marker of a default annotation
    pub default_close: String,
    /// Maximum container nesting accepted while matching
    pub max_depth: usize,
}

impl MatchConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom wildcard token
    #[inline]
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// With custom default-annotation markers
    #[inline]
    #[must_use]
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.default_open = open.into();
        self.default_close = close.into();
        self
    }

    /// With a custom recursion limit
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load configuration from TOML text; missing fields take defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] on malformed input, or any error from
    /// [`MatchConfig::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that markers are usable
    ///
    /// # Errors
    /// Returns an error if a marker is empty, the annotation markers are
    /// identical, the token equals a marker, or `max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.is_empty() {
            return Err(ConfigError::EmptyMarker("token"));
        }
        if self.default_open.is_empty() {
            return Err(ConfigError::EmptyMarker("default_open"));
        }
        if self.default_close.is_empty() {
            return Err(ConfigError::EmptyMarker("default_close"));
        }
        if self.default_open == self.default_close {
            return Err(ConfigError::IdenticalMarkers(self.default_open.clone()));
        }
        if self.token == self.default_open || self.token == self.default_close {
            return Err(ConfigError::TokenCollision(self.token.clone()));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            default_open: DEFAULT_OPEN.to_string(),
            default_close: DEFAULT_CLOSE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
