//! The interactive shell driver.
//!
//! Each iteration renders the prompt for the current [`ResolvedPath`], offers
//! the expanded candidates, reads one line, and dispatches
//! `path + " " + input` to the client. Soft failures from the client steer
//! the path:
//!
//! | Outcome          | Effect                                          |
//! |------------------|-------------------------------------------------|
//! | `Done`           | path unchanged                                  |
//! | `MissingItem`    | path advances to the longest shared prefix      |
//! | `UnknownItem`    | `<command>: command not found`                  |
//! | `UnknownCommand` | hint to use the help token                      |
//!
//! Client errors and terminal I/O errors end the loop.

use crate::config::{IMPLICIT_PATTERNS, ShellConfig};
use crate::core::client::{CommandExecutor, DispatchOutcome, FieldEnumerator};
use crate::core::error::{ClientError, PatternError, ShellError};
use crate::core::expand::expand_patterns;
use crate::core::pattern::{Pattern, PatternSet};
use crate::core::recovery::recover_path;
use crate::models::{LineReader, LineWriter, OutputLine, ResolvedPath, render_prompt};

// =============================================================================
// Loop Control
// =============================================================================

/// Why the loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellExit {
    /// A quit token was entered
    Quit,
    /// The reader ran out of input
    EndOfInput,
}

/// Result of a single iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit(ShellExit),
}

// =============================================================================
// Shell
// =============================================================================

/// Read-eval loop over a pattern table and a client.
pub struct Shell<C> {
    client: C,
    config: ShellConfig,
    patterns: PatternSet,
    path: ResolvedPath,
}

impl<C> Shell<C>
where
    C: FieldEnumerator + CommandExecutor,
{
    /// Create a shell with only the implicit patterns registered.
    pub fn new(client: C, config: ShellConfig) -> Self {
        let patterns = implicit_patterns().collect();
        Self {
            client,
            config,
            patterns,
            path: ResolvedPath::root(),
        }
    }

    /// Register the application's patterns, replacing any previous set.
    ///
    /// The implicit `quit` and `help` patterns are always appended. Fails on
    /// the first malformed pattern and leaves the previous set in place.
    pub fn set_commands<I, S>(&mut self, commands: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = PatternSet::new(commands)?;
        for implicit in implicit_patterns() {
            patterns.push(implicit);
        }
        tracing::debug!(count = patterns.len(), "registered patterns");
        self.patterns = patterns;
        Ok(())
    }

    pub fn commands(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn path(&self) -> &ResolvedPath {
        &self.path
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// The prompt for the current path.
    pub fn prompt(&self) -> String {
        render_prompt(&self.config.prompt, &self.path)
    }

    /// Candidate set for the current path.
    pub fn available_commands(&self) -> Result<Vec<String>, ClientError> {
        expand_patterns(&self.patterns, self.path.as_str(), &self.client)
    }

    /// Run until a quit token or end of input.
    pub fn run<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<ShellExit, ShellError>
    where
        R: LineReader + ?Sized,
        W: LineWriter + ?Sized,
    {
        tracing::info!(patterns = self.patterns.len(), "shell started");
        loop {
            if let Step::Exit(exit) = self.step(reader, writer)? {
                tracing::info!(?exit, "shell stopped");
                return Ok(exit);
            }
        }
    }

    /// Prompt, read one line and handle it.
    pub fn step<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<Step, ShellError>
    where
        R: LineReader + ?Sized,
        W: LineWriter + ?Sized,
    {
        let candidates = self.available_commands()?;
        let prompt = self.prompt();

        let Some(line) = reader.read_line(&prompt, &candidates)? else {
            return Ok(Step::Exit(ShellExit::EndOfInput));
        };

        self.handle_input(line.trim(), &candidates, writer)
    }

    /// Handle one already-read line against the given candidate set.
    pub fn handle_input<W>(
        &mut self,
        input: &str,
        candidates: &[String],
        writer: &mut W,
    ) -> Result<Step, ShellError>
    where
        W: LineWriter + ?Sized,
    {
        if self.config.is_quit(input) {
            return Ok(Step::Exit(ShellExit::Quit));
        }

        if self.config.is_help(input) {
            list_top_level(candidates, writer)?;
            return Ok(Step::Continue);
        }

        if input.is_empty() {
            self.path.clear();
        }

        let command = self.path.command_for(input);
        let outcome = self.client.dispatch(&command)?;
        tracing::debug!(%command, ?outcome, "dispatched");

        match outcome {
            DispatchOutcome::Done => {}
            DispatchOutcome::MissingItem => {
                let next = recover_path(&command, self.patterns.names(), &self.path);
                tracing::debug!(from = %self.path, to = %next, "recovered path");
                self.path = next;
            }
            DispatchOutcome::UnknownItem => {
                writer.write_line(OutputLine::comment(format!(
                    "{}: command not found",
                    command
                )))?;
            }
            DispatchOutcome::UnknownCommand => {
                let help = self
                    .config
                    .help_tokens
                    .first()
                    .map(String::as_str)
                    .unwrap_or("?");
                writer.write_line(OutputLine::comment(format!(
                    "Use '{}' to list available commands",
                    help
                )))?;
            }
        }

        Ok(Step::Continue)
    }
}

/// Print the candidates that have no interior space.
fn list_top_level<W>(candidates: &[String], writer: &mut W) -> Result<(), ShellError>
where
    W: LineWriter + ?Sized,
{
    for candidate in candidates.iter().filter(|c| !c.contains(' ')) {
        writer.write_line(OutputLine::info(candidate.as_str()))?;
    }
    Ok(())
}

fn implicit_patterns() -> impl Iterator<Item = Pattern> {
    IMPLICIT_PATTERNS.iter().copied().map(Pattern::literal)
}

// =============================================================================
// Tests
// =============================================================================
