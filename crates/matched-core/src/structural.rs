//! Recursive structural matching
//!
//! [`Matcher`] walks a pattern value depth-first, left to right, and stops at
//! the first mismatch. Containers are superset-tolerant: the actual value may
//! carry extra map keys or trailing sequence items, but never fewer.
//!
//! # Example
//!
//! ```rust
//! use matched_core::{Matcher, Value};
//! use serde_json::json;
//!
//! let matcher = Matcher::default();
//! let pattern = Value::from(json!({"foo": "bar***"}));
//! let actual = Value::from(json!({"foo": "bar2", "baz": 42}));
//! assert!(matcher.match_value(&pattern, &actual).is_ok());
//! ```

use crate::config::MatchConfig;
use crate::error::{ConfigError, MatchError, MatchResult, Mismatch, MismatchKind};
use crate::path::{MatchPath, PathSegment};
use crate::report::{dispatch, FailureReporter};
use crate::value::Value;
use crate::wildcard::WildcardPattern;

/// Pattern matching engine bound to one configuration
///
/// Stateless between calls; share freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Create matcher from a validated configuration
    ///
    /// # Errors
    /// Returns an error if `config` fails [`MatchConfig::validate`].
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create matcher with the default markers and a custom wildcard token
    ///
    /// # Errors
    /// Returns an error if `token` is empty or collides with a marker.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(MatchConfig::default().with_token(token))
    }

    /// Create matcher from TOML configuration text
    ///
    /// # Errors
    /// Returns [`MatchError::Config`] if the text is malformed or the
    /// configuration is invalid.
    pub fn from_toml_str(source: &str) -> MatchResult<Self> {
        let config = MatchConfig::from_toml_str(source)?;
        Ok(Self::new(config)?)
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Tokenise a pattern string with this matcher's markers
    #[inline]
    #[must_use]
    pub fn pattern<'a>(&self, source: &'a str) -> WildcardPattern<'a> {
        WildcardPattern::parse(source, &self.config)
    }

    /// Match a string pattern against a scalar or container
    ///
    /// # Errors
    /// Returns [`MatchError::Mismatch`] if `actual` does not match.
    pub fn match_str(&self, pattern: &str, actual: &Value) -> MatchResult {
        self.match_value(&Value::from(pattern), actual)
    }

    /// Match a pattern value against an actual value
    ///
    /// # Errors
    /// Returns [`MatchError::Mismatch`] for the first mismatch, or
    /// [`MatchError::DepthExceeded`] if nesting exceeds `max_depth`.
    pub fn match_value(&self, pattern: &Value, actual: &Value) -> MatchResult {
        Walk::new(self).descend(pattern, actual)
    }

    /// [`Matcher::match_str`], routing a mismatch to `reporter`
    ///
    /// # Errors
    /// Returns hard errors only; mismatches yield `Ok(false)`.
    pub fn match_str_with<R>(
        &self,
        pattern: &str,
        actual: &Value,
        reporter: &mut R,
    ) -> MatchResult<bool>
    where
        R: FailureReporter + ?Sized,
    {
        dispatch(self.match_str(pattern, actual), reporter)
    }

    /// [`Matcher::match_value`], routing a mismatch to `reporter`
    ///
    /// # Errors
    /// Returns hard errors only; mismatches yield `Ok(false)`.
    pub fn match_value_with<R>(
        &self,
        pattern: &Value,
        actual: &Value,
        reporter: &mut R,
    ) -> MatchResult<bool>
    where
        R: FailureReporter + ?Sized,
    {
        dispatch(self.match_value(pattern, actual), reporter)
    }

    /// Render a pattern string as its default text
    #[inline]
    #[must_use]
    pub fn render_default_str(&self, pattern: &str) -> String {
        self.pattern(pattern).render_default()
    }

    /// Render a pattern value as a concrete example value, keeping its shape
    ///
    /// # Errors
    /// Returns [`MatchError::DepthExceeded`] if nesting exceeds `max_depth`.
    pub fn render_default(&self, pattern: &Value) -> MatchResult<Value> {
        self.render_nested(pattern, 0)
    }

    fn render_nested(&self, pattern: &Value, depth: usize) -> MatchResult<Value> {
        let child = |value: &Value| {
            let limit = self.config.max_depth;
            if depth >= limit {
                tracing::warn!(limit, "pattern nesting too deep to render");
                return Err(MatchError::DepthExceeded { limit });
            }
            self.render_nested(value, depth + 1)
        };
        Ok(match pattern {
            Value::String(s) => Value::String(self.render_default_str(s)),
            Value::Sequence(items) => {
                Value::Sequence(items.iter().map(child).collect::<MatchResult<_>>()?)
            }
            Value::Map(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| Ok((key.clone(), child(value)?)))
                    .collect::<MatchResult<_>>()?,
            ),
            scalar => scalar.clone(),
        })
    }
}

/// Traversal state for one top-level match call
struct Walk<'m> {
    matcher: &'m Matcher,
    path: Vec<PathSegment>,
}

impl<'m> Walk<'m> {
    fn new(matcher: &'m Matcher) -> Self {
        Self {
            matcher,
            path: Vec::new(),
        }
    }

    fn descend(&mut self, pattern: &Value, actual: &Value) -> MatchResult {
        match (pattern, actual) {
            (Value::String(source), _) => {
                if self.matcher.pattern(source).matches_value(actual) {
                    Ok(())
                } else if actual.as_str().is_some() {
                    Err(self.mismatch(pattern, actual, MismatchKind::ValueMismatch))
                } else {
                    Err(self.mismatch(pattern, actual, MismatchKind::ShapeMismatch))
                }
            }
            (Value::Sequence(expected), Value::Sequence(items)) => {
                for (idx, expected) in expected.iter().enumerate() {
                    self.enter(PathSegment::Index(idx))?;
                    let result = match items.get(idx) {
                        Some(item) => self.descend(expected, item),
                        None => Err(self.missing(expected)),
                    };
                    self.path.pop();
                    result?;
                }
                Ok(())
            }
            (Value::Map(expected), Value::Map(entries)) => {
                for (key, expected) in expected {
                    self.enter(PathSegment::key(key.as_str()))?;
                    let result = match entries.get(key) {
                        Some(entry) => self.descend(expected, entry),
                        None => Err(self.missing(expected)),
                    };
                    self.path.pop();
                    result?;
                }
                Ok(())
            }
            (Value::Sequence(_) | Value::Map(_), _) => {
                Err(self.mismatch(pattern, actual, MismatchKind::ShapeMismatch))
            }
            (scalar, actual) if scalar == actual => Ok(()),
            (scalar, actual) => {
                let kind = if scalar.kind_name() == actual.kind_name() {
                    MismatchKind::ValueMismatch
                } else {
                    MismatchKind::ShapeMismatch
                };
                Err(self.mismatch(pattern, actual, kind))
            }
        }
    }

    fn enter(&mut self, segment: PathSegment) -> MatchResult {
        let limit = self.matcher.config.max_depth;
        if self.path.len() >= limit {
            tracing::warn!(limit, path = %self.current_path(), "pattern nesting too deep");
            return Err(MatchError::DepthExceeded { limit });
        }
        self.path.push(segment);
        Ok(())
    }

    fn current_path(&self) -> MatchPath {
        MatchPath::from(self.path.as_slice())
    }

    fn mismatch(&self, pattern: &Value, actual: &Value, kind: MismatchKind) -> MatchError {
        let mismatch = Mismatch::value(self.current_path(), pattern, actual, kind);
        tracing::debug!(path = %mismatch.path, ?kind, "pattern mismatch");
        mismatch.into()
    }

    fn missing(&self, pattern: &Value) -> MatchError {
        let mismatch = Mismatch::missing(self.current_path(), pattern);
        tracing::debug!(path = %mismatch.path, "pattern key missing");
        mismatch.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Recorder;
    use serde_json::json;

    fn check(pattern: serde_json::Value, actual: serde_json::Value) -> MatchResult {
        Matcher::default().match_value(&Value::from(pattern), &Value::from(actual))
    }

    fn mismatch(pattern: serde_json::Value, actual: serde_json::Value) -> Mismatch {
        check(pattern, actual)
            .unwrap_err()
            .into_mismatch()
            .expect("expected a mismatch")
    }

    #[test]
    fn simple_true() {
        assert!(check(json!({"foo": "bar"}), json!({"foo": "bar"})).is_ok());
    }

    #[test]
    fn simple_false() {
        let m = mismatch(json!({"foo": "bar"}), json!({"foo": "baz"}));
        assert_eq!(m.path.to_string(), "foo");
        assert_eq!(m.kind, MismatchKind::ValueMismatch);
        assert_eq!(m.message, "Given value of `foo` not match pattern `bar`");
    }

    #[test]
    fn partial_true() {
        assert!(check(json!({"foo": "bar"}), json!({"foo": "bar", "baz": 42})).is_ok());
    }

    #[test]
    fn partial_false_reports_first_failure() {
        let m = mismatch(json!({"foo": "bar", "baz": 42}), json!({"foo": "baz"}));
        assert_eq!(m.path.to_string(), "foo");
    }

    #[test]
    fn missing_key() {
        let m = mismatch(json!({"foo": "bar", "baz": 42}), json!({"foo": "bar"}));
        assert_eq!(m.kind, MismatchKind::MissingKey);
        assert_eq!(m.path.to_string(), "baz");
        assert_eq!(m.expected, Value::from(42));
        assert!(m.actual.is_none());
    }

    #[test]
    fn inline_string_wildcard() {
        assert!(check(json!({"foo": "bar***"}), json!({"foo": "bar2"})).is_ok());
        assert!(check(json!({"foo": "bar***"}), json!({"foo": "baz"})).is_err());
        assert!(check(json!({"string": "a***c"}), json!({"string": "ac"})).is_ok());
    }

    #[test]
    fn list_positional() {
        assert!(check(json!(["foo"]), json!(["foo", "bar"])).is_ok());

        let m = mismatch(json!(["foo", "bar", "baz"]), json!(["foo", "bar"]));
        assert_eq!(m.kind, MismatchKind::MissingKey);
        assert_eq!(m.path.to_string(), "2");
    }

    #[test]
    fn nested_wildcards() {
        assert!(check(
            json!({"foo": {"any": "***"}, "0": "***"}),
            json!({"foo": {"any": 11}, "0": "baz"})
        )
        .is_ok());
    }

    #[test]
    fn default_annotations_match_anything() {
        assert!(check(
            json!({"foo": {"any": "**>abc<**"}, "0": "**>some_value<**"}),
            json!({"foo": {"any": 11}, "0": "baz"})
        )
        .is_ok());
    }

    #[test]
    fn bare_wildcard_matches_containers() {
        assert!(check(json!({"baz": "***"}), json!({"baz": {"value": 1}})).is_ok());
        assert!(check(json!(["***"]), json!([[1, 2]])).is_ok());
    }

    #[test]
    fn string_pattern_against_number() {
        let m = mismatch(json!({"a": "foo"}), json!({"a": 1}));
        assert_eq!(m.kind, MismatchKind::ShapeMismatch);
    }

    #[test]
    fn scalar_types_must_agree() {
        assert!(check(json!(1), json!(1)).is_ok());
        assert!(check(json!(1), json!(1.0)).is_err());
        assert!(check(json!(1), json!("1")).is_err());
        assert!(check(json!(null), json!(null)).is_ok());
        assert!(check(json!(true), json!(false)).is_err());
    }

    #[test]
    fn shape_mismatch_at_top_level() {
        let m = mismatch(json!({"a": 1}), json!([1]));
        assert_eq!(m.kind, MismatchKind::ShapeMismatch);
        assert!(m.path.is_empty());

        assert!(check(json!(["a"]), json!({"0": "a"})).is_err());
        assert!(check(json!([]), json!("x")).is_err());
    }

    #[test]
    fn first_failure_only() {
        let pattern = json!({
            "baz": {"value": 1},
            "items": [{"a": "b", "c": 2}, {"z": "q"}]
        });
        let actual = json!({
            "baz": {"value": 1},
            "items": [{"a": "b2", "c": 22}, {"z": "x"}]
        });

        let mut recorder = Recorder::new();
        let matched = Matcher::default()
            .match_value_with(&Value::from(pattern), &Value::from(actual), &mut recorder)
            .unwrap();
        assert!(!matched);
        assert_eq!(recorder.failures().len(), 1);
        assert_eq!(
            recorder.last_message(),
            Some("Given value of `items.0.a` not match pattern `b`")
        );
        let (expected, actual, _) = &recorder.failures()[0];
        assert_eq!(expected, &Value::from("b"));
        assert_eq!(actual.as_ref(), Some(&Value::from("b2")));
    }

    #[test]
    fn match_str_with_reports_type_mismatch() {
        let mut called = 0;
        let matched = Matcher::default()
            .match_str_with("foo", &Value::from(1), &mut |_: &Value,
                                                          _: Option<&Value>,
                                                          _: &str| {
                called += 1;
            })
            .unwrap();
        assert!(!matched);
        assert_eq!(called, 1);
    }

    #[test]
    fn custom_token_makes_stars_literal() {
        let matcher = Matcher::with_token("%some_value%").unwrap();
        let pattern = Value::from(json!(["%some_value%", {"c": "%some_value%"}]));
        let actual = Value::from(json!([{"a": "b"}, {"z": "x", "c": 3}]));
        assert!(matcher.match_value(&pattern, &actual).is_ok());

        assert!(matcher.match_str("***", &Value::from("anything")).is_err());
        assert!(matcher.match_str("***", &Value::from("***")).is_ok());
    }

    #[test]
    fn depth_limit() {
        let matcher = Matcher::new(MatchConfig::default().with_max_depth(2)).unwrap();
        let shallow = Value::from(json!({"a": {"b": 1}}));
        assert!(matcher.match_value(&shallow, &shallow).is_ok());

        let deep = Value::from(json!({"a": {"b": {"c": 1}}}));
        let err = matcher.match_value(&deep, &deep).unwrap_err();
        assert!(matches!(err, MatchError::DepthExceeded { limit: 2 }));
    }

    #[test]
    fn depth_error_is_not_reported() {
        let matcher = Matcher::new(MatchConfig::default().with_max_depth(1)).unwrap();
        let deep = Value::from(json!([[1]]));
        let mut recorder = Recorder::new();
        let result = matcher.match_value_with(&deep, &deep, &mut recorder);
        assert!(result.is_err());
        assert!(recorder.failures().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(Matcher::with_token("").is_err());
    }

    #[test]
    fn toml_config_errors_are_match_errors() {
        let matcher = Matcher::from_toml_str(r#"token = "%any%""#).unwrap();
        assert_eq!(matcher.config().token, "%any%");

        let err = Matcher::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, MatchError::Config(ConfigError::ZeroDepth)));
        assert!(!err.is_mismatch());

        let err = Matcher::from_toml_str("token = ").unwrap_err();
        assert!(matches!(err, MatchError::Config(ConfigError::Toml(_))));
    }

    #[test]
    fn default_rendering_depth_limit() {
        let matcher = Matcher::new(MatchConfig::default().with_max_depth(2)).unwrap();
        let shallow = Value::from(json!({"a": ["**>x<**"]}));
        assert_eq!(
            matcher.render_default(&shallow).unwrap(),
            Value::from(json!({"a": ["x"]}))
        );

        let deep = Value::from(json!({"a": [["x"]]}));
        let err = matcher.render_default(&deep).unwrap_err();
        assert!(matches!(err, MatchError::DepthExceeded { limit: 2 }));
    }

    #[test]
    fn default_structure() {
        let matcher = Matcher::default();
        let pattern = Value::from(json!({"foo": {"any": "**>abc<**"}, "0": "**>some_value<**", "n": 3}));
        let rendered = matcher.render_default(&pattern).unwrap();
        assert_eq!(
            rendered,
            Value::from(json!({"foo": {"any": "abc"}, "0": "some_value", "n": 3}))
        );
    }

    #[test]
    fn default_structure_keeps_order() {
        let matcher = Matcher::default();
        let pattern = Value::from(json!({"z": "***", "a": ["x***"]}));
        let rendered = matcher.render_default(&pattern).unwrap();
        assert_eq!(rendered.to_string(), r#"{"z":"","a":["x"]}"#);
    }
}
