//! Testing utilities for the matched workspace
//!
//! Shared JSON fixtures and log setup for test binaries.

#![allow(missing_docs)]

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `matched_core=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("matched_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Pattern with a wildcard item after a nested object
pub const ITEMS_PATTERN: &str = r#"{
    "baz": {
        "value": 1
    },
    "items": [
        {
            "a": "b",
            "c": 2
        },
        "***"
    ]
}"#;

/// Actual document whose `items.0.a` differs from [`ITEMS_PATTERN`]
pub const ITEMS_WRONG_FIRST: &str = r#"{
    "baz": {
        "value": 1
    },
    "items": [
        {
            "a": "b2",
            "c": 22
        },
        {
            "z": "x",
            "c": 3
        }
    ]
}"#;

/// Actual document missing `items.0.a` entirely
pub const ITEMS_MISSING_KEY: &str = r#"{
    "baz": {
        "value": 1
    },
    "items": [
        {
            "a2": "b2",
            "c2": 22
        },
        {
            "z": "x",
            "c": 3
        }
    ]
}"#;

/// Pattern mixing a bare wildcard on an object-valued key
pub const COMPLEX_PATTERN: &str = r#"{
    "foo": "bar",
    "baz": "***",
    "items": [
        "***",
        { "z": "x", "c": 3 }
    ]
}"#;

/// Actual document satisfying [`COMPLEX_PATTERN`]
pub const COMPLEX_ACTUAL: &str = r#"{
    "foo": "bar",
    "baz": { "value": 1 },
    "items": [
        { "a": "b", "c": 2 },
        { "z": "x", "c": 3 }
    ]
}"#;

/// Pattern with default annotations and non-ASCII text
pub const DEFAULTS_PATTERN: &str = r#"{
    "emoji": "😂привет",
    "foo": "bar",
    "baz": "**>4<**2",
    "items": ["**>foo<**", { "z": "x", "c": 3 }]
}"#;

/// Rendered default of [`DEFAULTS_PATTERN`]
pub const DEFAULTS_RENDERED: &str = r#"{
    "emoji": "😂привет",
    "foo": "bar",
    "baz": "42",
    "items": [
        "foo",
        {
            "z": "x",
            "c": 3
        }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
