//! Shell configuration.
//!
//! Centralizes the constants that shape pattern syntax and prompt rendering,
//! plus the runtime [`ShellConfig`] an owning application hands to the shell.

use serde::Deserialize;

// =============================================================================
// Pattern Syntax
// =============================================================================

/// Separator between segments of a pattern or resolved path.
pub const SEPARATOR: char = '.';

/// Leading character of a dynamic segment (`?source_field`).
pub const DYNAMIC_MARKER: char = '?';

/// Separator between the source and field identifiers of a dynamic segment.
pub const MARKER_FIELD_SEPARATOR: char = '_';

// =============================================================================
// Prompt
// =============================================================================

/// Placeholder substituted with the resolved path on every prompt.
pub const PATH_PLACEHOLDER: &str = "%PATH%";

/// Prompt template used when none is configured.
pub const DEFAULT_PROMPT: &str = "%PATH%>";

// =============================================================================
// Reserved Tokens
// =============================================================================

/// Patterns registered implicitly alongside the application's own.
pub const IMPLICIT_PATTERNS: &[&str] = &["quit", "help"];

/// Inputs that end the loop without dispatching.
pub const DEFAULT_QUIT_TOKENS: &[&str] = &["quit", "exit"];

/// Inputs that list the top-level candidates instead of dispatching.
pub const DEFAULT_HELP_TOKENS: &[&str] = &["?", "help"];

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime settings supplied once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt template; [`PATH_PLACEHOLDER`] is replaced by the current path.
    pub prompt: String,
    /// Exact, case-sensitive tokens that terminate the loop.
    pub quit_tokens: Vec<String>,
    /// Exact, case-sensitive tokens that print the top-level candidates.
    pub help_tokens: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            quit_tokens: DEFAULT_QUIT_TOKENS.iter().map(|s| s.to_string()).collect(),
            help_tokens: DEFAULT_HELP_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ShellConfig {
    /// Override the prompt template.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn is_quit(&self, input: &str) -> bool {
        self.quit_tokens.iter().any(|t| t == input)
    }

    pub fn is_help(&self, input: &str) -> bool {
        self.help_tokens.iter().any(|t| t == input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let config = ShellConfig::default();
        assert!(config.is_quit("quit"));
        assert!(config.is_quit("exit"));
        assert!(!config.is_quit("Quit"));
        assert!(config.is_help("?"));
        assert!(config.is_help("help"));
        assert!(!config.is_help("HELP"));
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{ "quit_tokens": ["quit", "q"] }"#).unwrap();
        assert!(config.is_quit("q"));
        assert!(!config.is_quit("exit"));
        assert!(config.is_help("?"));
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }
}
