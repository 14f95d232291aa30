//! Wildcard-aware string matching
//!
//! A pattern string is tokenised into literal text, wildcard tokens and
//! default annotations. While matching, both wildcards and annotations stand
//! for "any substring"; while rendering a default, annotations contribute
//! their wrapped text and wildcards vanish.
//!
//! # Example
//!
//! ```rust
//! use matched_core::{MatchConfig, WildcardPattern};
//!
//! let config = MatchConfig::default();
//! let pattern = WildcardPattern::parse("cu***mber", &config);
//! assert!(pattern.matches_str("cucumber"));
//! assert!(!pattern.matches_str("cucumbez"));
//! ```

use crate::config::MatchConfig;
use crate::value::Value;

/// One lexical element of a pattern string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text that must appear verbatim
    Literal(&'a str),
    /// Wildcard token
    Wildcard,
    /// Default annotation carrying its wrapped text
    Default(&'a str),
}

/// Tokenised pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern<'a> {
    source: &'a str,
    pieces: Vec<Piece<'a>>,
}

impl<'a> WildcardPattern<'a> {
    /// Tokenise `source` using the markers from `config`.
    ///
    /// Annotation spans are resolved first, so a token that overlaps an
    /// opening marker or sits inside the wrapped text is not a wildcard. Only
    /// the text between spans is split on the token. An opening marker
    /// without a closing marker after it stays literal text.
    #[must_use]
    pub fn parse(source: &'a str, config: &MatchConfig) -> Self {
        let token = config.token.as_str();
        let open = config.default_open.as_str();
        let close = config.default_close.as_str();

        let mut pieces = Vec::new();
        let mut rest = source;
        while let Some((before, body, after)) = next_annotation(rest, open, close) {
            push_tokens(&mut pieces, before, token);
            pieces.push(Piece::Default(body));
            rest = after;
        }
        push_tokens(&mut pieces, rest, token);

        Self { source, pieces }
    }

    /// Untokenised pattern text
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Lexical elements in order
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    /// Check if pattern contains any wildcard region
    #[inline]
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        self.pieces.iter().any(|p| !matches!(p, Piece::Literal(_)))
    }

    /// Check if pattern is made only of wildcard regions.
    ///
    /// Such a pattern matches any value of any shape.
    #[inline]
    #[must_use]
    pub fn is_bare(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(|p| !matches!(p, Piece::Literal(_)))
    }

    /// Literal segments between wildcard regions.
    ///
    /// `n` wildcard regions always yield `n + 1` segments, some possibly empty.
    #[must_use]
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = Vec::with_capacity(self.pieces.len() + 1);
        let mut current = "";
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => current = *text,
                Piece::Wildcard | Piece::Default(_) => {
                    segments.push(current);
                    current = "";
                }
            }
        }
        segments.push(current);
        segments
    }

    /// Match against an actual string
    #[must_use]
    pub fn matches_str(&self, actual: &str) -> bool {
        if self.source == actual {
            return true;
        }

        let segments = self.segments();
        let Some((first, rest)) = segments.split_first() else {
            return actual.is_empty();
        };
        let Some((last, middle)) = rest.split_last() else {
            return *first == actual;
        };

        if actual.len() < first.len() + last.len()
            || !actual.starts_with(first)
            || !actual.ends_with(last)
        {
            return false;
        }

        let mut window = &actual[first.len()..actual.len() - last.len()];
        for segment in middle {
            match window.find(segment) {
                Some(at) => window = &window[at + segment.len()..],
                None => return false,
            }
        }
        true
    }

    /// Match against any scalar or container.
    ///
    /// Only a bare wildcard accepts non-string values.
    #[must_use]
    pub fn matches_value(&self, actual: &Value) -> bool {
        if self.is_bare() {
            return true;
        }
        match actual {
            Value::String(s) => self.matches_str(s),
            _ => false,
        }
    }

    /// Render the default form: annotation text substituted, tokens removed
    #[must_use]
    pub fn render_default(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) | Piece::Default(text) => out.push_str(text),
                Piece::Wildcard => {}
            }
        }
        out
    }
}

/// Split `text` around its first `open`..`close` span
fn next_annotation<'a>(
    text: &'a str,
    open: &str,
    close: &str,
) -> Option<(&'a str, &'a str, &'a str)> {
    if open.is_empty() || close.is_empty() {
        return None;
    }
    let start = text.find(open)?;
    let body_start = start + open.len();
    let end = body_start + text[body_start..].find(close)?;
    Some((&text[..start], &text[body_start..end], &text[end + close.len()..]))
}

fn push_tokens<'a>(pieces: &mut Vec<Piece<'a>>, text: &'a str, token: &str) {
    if token.is_empty() {
        push_literal(pieces, text);
        return;
    }
    let mut parts = text.split(token);
    if let Some(first) = parts.next() {
        push_literal(pieces, first);
    }
    for part in parts {
        pieces.push(Piece::Wildcard);
        push_literal(pieces, part);
    }
}

fn push_literal<'a>(pieces: &mut Vec<Piece<'a>>, text: &'a str) {
    if !text.is_empty() {
        pieces.push(Piece::Literal(text));
    }
}
