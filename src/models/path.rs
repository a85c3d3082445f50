//! The resolved path the shell is currently positioned at.

use std::fmt;

use crate::config::SEPARATOR;

/// The confirmed portion of a multi-segment command.
///
/// Stored with `.` separators; rendered to the user with spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// Create a path from its `.`-joined form.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The root (empty) path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Get the path in its `.`-joined form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes of the `.`-joined form.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Render with spaces between segments, as shown in the prompt.
    pub fn display(&self) -> String {
        self.0.replace(SEPARATOR, " ")
    }

    /// Reset to the root.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Build the full command line for `input` typed at this path.
    pub fn command_for(&self, input: &str) -> String {
        if self.0.is_empty() {
            input.to_string()
        } else {
            format!("{} {}", self.display(), input)
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResolvedPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResolvedPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for ResolvedPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResolvedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
