//! Tab completion against the current candidate set.
//!
//! Line readers hand the shell's candidates to these helpers:
//! - Single match: complete immediately (with a trailing space)
//! - Multiple matches: show the common prefix and all options
//! - Ghost text hints while typing

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Public API
// ============================================================================

/// Complete `input` against `candidates` on Tab press.
///
/// Matching is a case-insensitive prefix match on the whole line.
pub fn autocomplete(input: &str, candidates: &[String]) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let matches = matching(input, candidates);

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Get the ghost-text suffix that would complete `input`.
///
/// Returns the remainder of the first candidate that strictly extends the input.
pub fn get_hint(input: &str, candidates: &[String]) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    candidates.iter().find_map(|c| {
        let end = prefix_end(c, input)?;
        let rest = &c[end..];
        (!rest.is_empty()).then(|| rest.to_string())
    })
}

// ============================================================================
// Utilities
// ============================================================================

fn matching(input: &str, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|c| prefix_end(c, input).is_some())
        .cloned()
        .collect()
}

/// Byte offset in `candidate` just past a case-insensitive match of `input`.
fn prefix_end(candidate: &str, input: &str) -> Option<usize> {
    let mut chars = candidate.char_indices();
    let mut end = 0;
    for want in input.chars() {
        let (i, got) = chars.next()?;
        if !got.to_lowercase().eq(want.to_lowercase()) {
            return None;
        }
        end = i + got.len_utf8();
    }
    Some(end)
}

/// Find the common prefix of multiple strings (case-insensitive).
pub fn find_common_prefix(strings: &[String]) -> String {
    if strings.is_empty() {
        return String::new();
    }
    if strings.len() == 1 {
        return strings[0].clone();
    }

    let first = &strings[0];
    let mut prefix_chars = first.chars().count();

    for s in &strings[1..] {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["user", "user add", "user remove", "group", "group add", "quit", "help"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_completion_single() {
        assert_eq!(
            autocomplete("gr", &["group".to_string()]),
            AutocompleteResult::Single("group ".to_string())
        );
        assert_eq!(
            autocomplete("user r", &candidates()),
            AutocompleteResult::Single("user remove ".to_string())
        );
    }

    #[test]
    fn test_completion_multiple() {
        match autocomplete("us", &candidates()) {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "user");
                assert_eq!(matches, vec!["user", "user add", "user remove"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_completion_case_insensitive() {
        match autocomplete("GRO", &candidates()) {
            AutocompleteResult::Multiple(common, _) => assert_eq!(common, "group"),
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(autocomplete("xyz", &candidates()), AutocompleteResult::None);
        assert_eq!(autocomplete("   ", &candidates()), AutocompleteResult::None);
    }

    #[test]
    fn test_hint() {
        assert_eq!(get_hint("qu", &candidates()), Some("it".to_string()));
        assert_eq!(get_hint("user", &candidates()), Some(" add".to_string()));
        assert_eq!(get_hint("help", &candidates()), None);
        assert_eq!(get_hint("", &candidates()), None);
    }

    #[test]
    fn test_hint_slices_candidate_chars() {
        // KELVIN SIGN is three bytes but lowercases to a one-byte 'k'
        let candidates = vec!["kelvin".to_string()];
        assert_eq!(get_hint("\u{212A}e", &candidates), Some("lvin".to_string()));
        assert_eq!(get_hint("KEL", &candidates), Some("vin".to_string()));

        let candidates = vec!["\u{212A}elvin".to_string()];
        assert_eq!(get_hint("ke", &candidates), Some("lvin".to_string()));
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&[]), "");
    }
}
