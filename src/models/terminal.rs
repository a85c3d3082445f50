//! Terminal-facing types: output lines and the reader/writer capabilities.

use std::io;

use crate::config::PATH_PLACEHOLDER;
use crate::models::ResolvedPath;

/// A single line of shell output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Listing entry (help output)
    Info(String),
    /// Hint or diagnostic for the user
    Comment(String),
    /// Error message
    Error(String),
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    /// The line's text without styling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Info(s) | Self::Comment(s) | Self::Error(s) => s,
        }
    }
}

/// Reads one line of user input.
pub trait LineReader {
    /// Show `prompt`, offer `completions`, and return the entered line.
    ///
    /// `Ok(None)` means the input is exhausted (EOF).
    fn read_line(&mut self, prompt: &str, completions: &[String]) -> io::Result<Option<String>>;
}

/// Writes shell output.
pub trait LineWriter {
    fn write_line(&mut self, line: OutputLine) -> io::Result<()>;
}

/// Collects output in memory.
impl LineWriter for Vec<OutputLine> {
    fn write_line(&mut self, line: OutputLine) -> io::Result<()> {
        self.push(line);
        Ok(())
    }
}

/// Substitute the prompt placeholder with the path rendered with spaces.
pub fn render_prompt(template: &str, path: &ResolvedPath) -> String {
    template.replace(PATH_PLACEHOLDER, &path.display())
}
