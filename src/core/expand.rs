//! Pattern expansion into completion candidates.
//!
//! Given the registered patterns and the current path filter, produces every
//! command string still reachable from that path:
//!
//! - Patterns not containing the filter as a substring are skipped
//! - Segments equal to the filter segment at the same index are consumed
//! - Remaining segments are expanded (dynamic markers via the enumerator)
//!   and multiplied onto the roots accumulated so far
//!
//! Both intermediate prefixes and full commands are returned, since both are
//! valid completions.

use indexmap::IndexSet;

use crate::config::SEPARATOR;
use crate::core::client::FieldEnumerator;
use crate::core::error::ClientError;
use crate::core::pattern::{Pattern, PatternSet, Segment};

/// Expand `patterns` against `filter` into the candidate set.
///
/// The result is duplicate-free and keeps first-production order across all
/// patterns. An enumerator failure aborts the whole expansion.
pub fn expand_patterns(
    patterns: &PatternSet,
    filter: &str,
    enumerator: &impl FieldEnumerator,
) -> Result<Vec<String>, ClientError> {
    let filter_segments: Vec<&str> = filter.split(SEPARATOR).collect();
    let mut candidates = IndexSet::new();

    for pattern in patterns {
        if !filter.is_empty() && !pattern.as_str().contains(filter) {
            continue;
        }
        expand_pattern(pattern, &filter_segments, enumerator, &mut candidates)?;
    }

    tracing::trace!(filter, count = candidates.len(), "expanded patterns");
    Ok(candidates.into_iter().collect())
}

/// Expand every pattern down to its last segment.
///
/// Only commands that fill every segment of their pattern are returned, so an
/// enumerated value containing spaces still counts as a single item.
pub fn expand_full_commands(
    patterns: &PatternSet,
    enumerator: &impl FieldEnumerator,
) -> Result<Vec<String>, ClientError> {
    let mut prefixes = IndexSet::new();
    let mut full = IndexSet::new();

    for pattern in patterns {
        full.extend(expand_pattern(pattern, &[], enumerator, &mut prefixes)?);
    }

    Ok(full.into_iter().collect())
}

/// Expand one pattern, returning the products of its last expanded segment.
fn expand_pattern(
    pattern: &Pattern,
    filter_segments: &[&str],
    enumerator: &impl FieldEnumerator,
    candidates: &mut IndexSet<String>,
) -> Result<Vec<String>, ClientError> {
    let mut roots = vec![String::new()];

    for (i, segment) in pattern.segments().iter().enumerate() {
        if filter_segments.get(i) == Some(&segment.as_str()) {
            continue;
        }

        let values = match segment {
            Segment::Literal(token) => vec![token.clone()],
            Segment::Dynamic { source, field, .. } => enumerator.list_values(source, field)?,
        };

        roots = cartesian(&roots, &values, candidates);
    }

    Ok(roots)
}

/// Join every value onto every root, recording each product as a candidate.
fn cartesian(
    roots: &[String],
    values: &[String],
    candidates: &mut IndexSet<String>,
) -> Vec<String> {
    let mut next = Vec::with_capacity(roots.len() * values.len());
    for value in values {
        for root in roots {
            let command = if root.is_empty() {
                value.clone()
            } else {
                format!("{} {}", root, value)
            };
            candidates.insert(command.clone());
            next.push(command);
        }
    }
    next
}

// =============================================================================
// Tests
// =============================================================================
