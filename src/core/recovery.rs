//! Path recovery after a "missing item" dispatch.
//!
//! When the executor reports that a command needs more segments, the shell
//! moves its resolved path forward to the longest prefix the attempted command
//! shares with a registered pattern. Matching is character based: a pattern
//! takes part only if it contains the attempted command as a substring, and
//! the shared prefix is compared char by char, not segment by segment.

use crate::config::SEPARATOR;
use crate::models::ResolvedPath;

/// Compute the path to adopt after `command` came back as missing an item.
///
/// Returns `current` unchanged unless some registered name yields a longer
/// common prefix.
pub fn recover_path<'a>(
    command: &str,
    names: impl IntoIterator<Item = &'a str>,
    current: &ResolvedPath,
) -> ResolvedPath {
    let attempted = command.replace(' ', &SEPARATOR.to_string());
    let mut best = current.clone();

    for name in names {
        if !name.contains(attempted.as_str()) {
            continue;
        }
        let shared = common_part(&attempted, name).trim_matches(SEPARATOR);
        if shared.len() > best.len() {
            best = ResolvedPath::new(shared);
        }
    }

    best
}

/// Longest common character prefix of `a` and `b`, borrowed from `a`.
pub fn common_part<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for ((i, ca), cb) in a.char_indices().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end = i + ca.len_utf8();
    }
    &a[..end]
}
