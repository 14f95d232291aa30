//! JSON text front end
//!
//! Decodes pattern and actual documents with `serde_json` and hands them to
//! the structural matcher. Decode failures surface as
//! [`MatchError::MalformedJson`] and never reach a failure reporter.

use crate::error::{MatchError, MatchResult, Side};
use crate::report::{dispatch, FailureReporter};
use crate::structural::Matcher;
use crate::value::Value;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indent used for rendered default documents
const INDENT: &[u8] = b"    ";

/// Decode JSON text into a [`Value`], keeping object key order
///
/// # Errors
/// Returns [`MatchError::MalformedJson`] tagged with `side`.
pub fn decode(text: &str, side: Side) -> MatchResult<Value> {
    tracing::trace!(%side, bytes = text.len(), "decoding JSON");
    serde_json::from_str::<serde_json::Value>(text)
        .map(Value::from)
        .map_err(|source| MatchError::malformed(side, source))
}

/// Encode a value as pretty JSON with a four-space indent.
///
/// Key order follows the value; non-ASCII text is emitted unescaped.
///
/// # Errors
/// Returns [`MatchError::Encode`] if serialization fails.
pub fn to_pretty_json(value: &Value) -> MatchResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(MatchError::Encode)?;
    String::from_utf8(buf).map_err(|e| MatchError::Encode(serde_json::Error::custom(e)))
}

impl Matcher {
    /// Match JSON pattern text against JSON actual text
    ///
    /// # Errors
    /// Returns [`MatchError::MalformedJson`] if either side fails to decode,
    /// otherwise the result of [`Matcher::match_value`].
    pub fn match_json(&self, pattern: &str, actual: &str) -> MatchResult {
        let pattern = decode(pattern, Side::Pattern)?;
        let actual = decode(actual, Side::Actual)?;
        self.match_value(&pattern, &actual)
    }

    /// [`Matcher::match_json`], routing a mismatch to `reporter`
    ///
    /// # Errors
    /// Returns malformed input and other hard errors; mismatches yield
    /// `Ok(false)`.
    pub fn match_json_with<R>(
        &self,
        pattern: &str,
        actual: &str,
        reporter: &mut R,
    ) -> MatchResult<bool>
    where
        R: FailureReporter + ?Sized,
    {
        dispatch(self.match_json(pattern, actual), reporter)
    }

    /// Render JSON pattern text as a pretty-printed default document
    ///
    /// # Errors
    /// Returns [`MatchError::MalformedJson`] if the pattern fails to decode,
    /// or [`MatchError::DepthExceeded`] if it nests deeper than `max_depth`.
    pub fn render_default_json(&self, pattern: &str) -> MatchResult<String> {
        let pattern = decode(pattern, Side::Pattern)?;
        let rendered = self.render_default(&pattern)?;
        tracing::trace!("rendered default JSON document");
        to_pretty_json(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Recorder;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_keeps_order() {
        let value = decode(r#"{"b": 1, "a": 2}"#, Side::Pattern).unwrap();
        assert_eq!(value.to_string(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn decode_reports_side() {
        let err = decode("{", Side::Actual).unwrap_err();
        assert!(matches!(
            err,
            MatchError::MalformedJson {
                side: Side::Actual,
                ..
            }
        ));
    }

    #[test]
    fn malformed_pattern_is_not_a_mismatch() {
        let mut recorder = Recorder::new();
        let result = Matcher::default().match_json_with("{nope", "{}", &mut recorder);
        assert!(matches!(
            result,
            Err(MatchError::MalformedJson {
                side: Side::Pattern,
                ..
            })
        ));
        assert!(recorder.failures().is_empty());
    }

    #[test]
    fn malformed_actual_is_not_a_mismatch() {
        let result = Matcher::default().match_json(r#"{"a": 1}"#, "[1,");
        assert!(matches!(
            result,
            Err(MatchError::MalformedJson {
                side: Side::Actual,
                ..
            })
        ));
    }

    #[test]
    fn pretty_json_layout() {
        let value = decode(r#"{"a": [1, {"b": null}], "e": [], "o": {}}"#, Side::Pattern).unwrap();
        let text = to_pretty_json(&value).unwrap();
        assert_eq!(
            text,
            "{\n    \"a\": [\n        1,\n        {\n            \"b\": null\n        }\n    ],\n    \"e\": [],\n    \"o\": {}\n}"
        );
    }

    #[test]
    fn default_json_scalar() {
        let text = Matcher::default().render_default_json(r#""id-**>7<**""#).unwrap();
        assert_eq!(text, r#""id-7""#);
    }

    #[test]
    fn default_json_rejects_malformed() {
        assert!(Matcher::default().render_default_json("[").is_err());
    }
}
