//! Registered command patterns.
//!
//! A pattern is a `.`-joined list of segments. A segment is either a literal
//! token (`user`, `add`) or a dynamic marker (`?users_name`) whose values are
//! supplied at runtime by a [`FieldEnumerator`](crate::core::FieldEnumerator).
//!
//! Patterns are validated once, at registration, so expansion never has to
//! deal with a malformed table.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DYNAMIC_MARKER, SEPARATOR};
use crate::core::error::PatternError;

/// `?source_field`: two non-empty identifiers around a single `_`.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\?([^_]+)_([^_]+)$").expect("marker regex is valid"));

// =============================================================================
// Segment
// =============================================================================

/// One `.`-delimited unit of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Values come from the enumerator for `(source, field)`.
    Dynamic {
        raw: String,
        source: String,
        field: String,
    },
}

impl Segment {
    /// Parse a single segment of `pattern`.
    fn parse(pattern: &str, raw: &str) -> Result<Self, PatternError> {
        if raw.chars().any(char::is_whitespace) {
            return Err(PatternError::Whitespace {
                pattern: pattern.to_string(),
                segment: raw.to_string(),
            });
        }

        if !raw.starts_with(DYNAMIC_MARKER) {
            return Ok(Self::Literal(raw.to_string()));
        }

        let caps = MARKER_RE
            .captures(raw)
            .ok_or_else(|| PatternError::MalformedMarker {
                pattern: pattern.to_string(),
                segment: raw.to_string(),
            })?;

        Ok(Self::Dynamic {
            raw: raw.to_string(),
            source: caps[1].to_string(),
            field: caps[2].to_string(),
        })
    }

    /// The segment exactly as written in the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Dynamic { raw, .. } => raw,
        }
    }
}

// =============================================================================
// Pattern
// =============================================================================

/// A validated command pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse and validate a pattern string.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        let segments = raw
            .split(SEPARATOR)
            .enumerate()
            .map(|(position, seg)| {
                if seg.is_empty() {
                    Err(PatternError::EmptySegment {
                        pattern: raw.to_string(),
                        position,
                    })
                } else {
                    Segment::parse(raw, seg)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// A single literal segment, for built-in tokens without separators or markers.
    pub(crate) fn literal(token: &str) -> Self {
        Self {
            raw: token.to_string(),
            segments: vec![Segment::Literal(token.to_string())],
        }
    }

    /// The pattern string as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// =============================================================================
// PatternSet
// =============================================================================

/// Insertion-ordered set of patterns.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Build a set from pattern strings, failing on the first malformed entry.
    pub fn new<I, S>(raw: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for entry in raw {
            set.insert(entry.as_ref())?;
        }
        Ok(set)
    }

    /// Register one pattern. Re-registering an existing pattern is a no-op.
    pub fn insert(&mut self, raw: &str) -> Result<(), PatternError> {
        self.push(Pattern::parse(raw)?);
        Ok(())
    }

    /// Add an already validated pattern, skipping duplicates.
    pub fn push(&mut self, pattern: Pattern) {
        if !self.patterns.iter().any(|p| p.raw == pattern.raw) {
            self.patterns.push(pattern);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered pattern strings, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut set = Self::default();
        for pattern in iter {
            set.push(pattern);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let p = Pattern::parse("user.add").unwrap();
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("user".to_string()),
                Segment::Literal("add".to_string())
            ]
        );
        assert_eq!(p.to_string(), "user.add");
    }

    #[test]
    fn test_dynamic_segment() {
        let p = Pattern::parse("user.remove.?users_name").unwrap();
        match &p.segments()[2] {
            Segment::Dynamic { raw, source, field } => {
                assert_eq!(raw, "?users_name");
                assert_eq!(source, "users");
                assert_eq!(field, "name");
            }
            other => panic!("Expected dynamic segment, got {:?}", other),
        }
        assert_eq!(p.segments()[2].as_str(), "?users_name");
    }

    #[test]
    fn test_malformed_markers() {
        for bad in ["a.?users", "a.?users_name_id", "a.?_name", "a.?users_", "a.?"] {
            match Pattern::parse(bad) {
                Err(PatternError::MalformedMarker { pattern, .. }) => assert_eq!(pattern, bad),
                other => panic!("Expected malformed marker for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(
            Pattern::parse("user..add"),
            Err(PatternError::EmptySegment {
                pattern: "user..add".to_string(),
                position: 1
            })
        );
        assert!(matches!(
            Pattern::parse("user.add."),
            Err(PatternError::EmptySegment { position: 2, .. })
        ));
        assert!(matches!(
            Pattern::parse("user add"),
            Err(PatternError::Whitespace { .. })
        ));
    }

    #[test]
    fn test_set_dedupes_and_keeps_order() {
        let set = PatternSet::new(["b.x", "a.y", "b.x"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["b.x", "a.y"]);
    }

    #[test]
    fn test_literal_matches_parsed() {
        assert_eq!(Pattern::literal("quit"), Pattern::parse("quit").unwrap());

        let set: PatternSet = ["help", "quit", "help"]
            .into_iter()
            .map(Pattern::literal)
            .collect();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["help", "quit"]);
    }

    #[test]
    fn test_set_fails_fast() {
        assert!(PatternSet::new(["ok.one", "bad.?oops", "ok.two"]).is_err());
        assert!(PatternSet::new(Vec::<String>::new()).unwrap().is_empty());
    }
}
