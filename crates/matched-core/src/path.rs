//! Match paths for locating mismatches
//!
//! Provides [`MatchPath`] for hierarchical addressing of leaves within a value.

use std::fmt::{self, Display, Formatter};

/// One step into a container
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Map key
    Key(String),
    /// Sequence index (0-based)
    Index(usize),
}

impl PathSegment {
    /// Create key segment
    #[inline]
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

/// Path from the root of a value to one of its leaves
///
/// # Examples
/// - `[Key("items"), Index(0), Key("a")]` → `items.0.a`
/// - `[]` (root) → empty string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatchPath(Vec<PathSegment>);

impl MatchPath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Create path from a single segment
    #[inline]
    #[must_use]
    pub fn single(segment: impl Into<PathSegment>) -> Self {
        Self(vec![segment.into()])
    }

    /// Empty path (root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is empty (root)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Join segments with custom separator
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Display for MatchPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

impl From<Vec<PathSegment>> for MatchPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl From<&[PathSegment]> for MatchPath {
    fn from(segments: &[PathSegment]) -> Self {
        Self(segments.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display_mixes_keys_and_indices() {
        let path = MatchPath::single("items").child(0).child("a");
        assert_eq!(path.to_string(), "items.0.a");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn path_root_renders_empty() {
        let path = MatchPath::root();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
        assert!(path.last().is_none());
    }

    #[test]
    fn path_last() {
        let path = MatchPath::single("a").child(3);
        assert_eq!(path.last(), Some(&PathSegment::Index(3)));
    }

    #[test]
    fn path_join() {
        let path = MatchPath::new(vec![PathSegment::key("a"), PathSegment::key("b")]);
        assert_eq!(path.join("/"), "a/b");
    }

    #[test]
    fn path_from_slice() {
        let segments = [PathSegment::key("x"), PathSegment::Index(1)];
        let path = MatchPath::from(&segments[..]);
        assert_eq!(path.segments(), &segments);
    }
}
