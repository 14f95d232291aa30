//! Leaf diffs for assertion failures
//!
//! Each leaf is rendered as pretty JSON and compared line by line with
//! `similar`, producing a unified diff headed `--- Pattern` / `+++ Actual`.

use matched_core::json::to_pretty_json;
use matched_core::Value;
use similar::TextDiff;

/// Canonical text of a leaf; an absent leaf renders as empty text
#[must_use]
pub fn render_leaf(leaf: Option<&Value>) -> String {
    let Some(value) = leaf else {
        return String::new();
    };
    let mut text = to_pretty_json(value).unwrap_or_else(|_| value.to_string());
    // Trailing newline keeps "\ No newline at end of file" out of the diff
    text.push('\n');
    text
}

/// Unified diff of a pattern leaf against an actual leaf
#[must_use]
pub fn leaf_diff(expected: &Value, actual: Option<&Value>) -> String {
    let pattern = render_leaf(Some(expected));
    let actual = render_leaf(actual);
    TextDiff::from_lines(&pattern, &actual)
        .unified_diff()
        .header("Pattern", "Actual")
        .to_string()
}
