//! Error types for the shell.
//!
//! - [`PatternError`] - malformed entries in the registered pattern table
//! - [`ClientError`] - failures reported by the enumerator or executor
//! - [`ShellError`] - everything that ends the read-eval loop

use thiserror::Error;

/// Configuration errors in a registered pattern.
///
/// These indicate a programming error in the pattern table, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Empty pattern string
    #[error("empty pattern")]
    Empty,
    /// Two separators in a row, or a leading/trailing separator
    #[error("pattern '{pattern}': empty segment at position {position}")]
    EmptySegment { pattern: String, position: usize },
    /// Segment containing whitespace
    #[error("pattern '{pattern}': segment '{segment}' contains whitespace")]
    Whitespace { pattern: String, segment: String },
    /// Dynamic segment not of the form `?source_field`
    #[error("pattern '{pattern}': malformed dynamic segment '{segment}' (expected ?source_field)")]
    MalformedMarker { pattern: String, segment: String },
}

/// Failure reported by a client collaborator.
///
/// Anything a client returns as an error is fatal to the loop.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Enumerator has no values for the requested pair
    #[error("no values for {table}.{field}")]
    UnknownField { table: String, field: String },
    /// Generic failure with a message
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// Errors that terminate the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid pattern table: {0}")]
    Pattern(#[from] PatternError),
    #[error("client failure: {0}")]
    Client(#[from] ClientError),
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::MalformedMarker {
            pattern: "user.?users".to_string(),
            segment: "?users".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pattern 'user.?users': malformed dynamic segment '?users' (expected ?source_field)"
        );
    }

    #[test]
    fn test_shell_error_wraps_client() {
        let err: ShellError = ClientError::UnknownField {
            table: "users".to_string(),
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "client failure: no values for users.name");
    }
}
