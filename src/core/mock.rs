//! Test doubles for the shell's collaborators.
//!
//! Compiled for unit tests and behind the `mock` feature for integration tests
//! and downstream crates.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;

use crate::core::client::{CommandExecutor, DispatchOutcome, FieldEnumerator};
use crate::core::error::ClientError;
use crate::models::LineReader;

// =============================================================================
// StaticFields
// =============================================================================

/// Enumerator backed by a fixed table; records every lookup.
#[derive(Debug, Default)]
pub struct StaticFields {
    values: HashMap<(String, String), Vec<String>>,
    calls: RefCell<Vec<(String, String)>>,
}

impl StaticFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: &str, field: &str, values: &[&str]) -> Self {
        self.values.insert(
            (source.to_string(), field.to_string()),
            values.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    /// Every `(source, field)` lookup so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl FieldEnumerator for StaticFields {
    fn list_values(&self, source: &str, field: &str) -> Result<Vec<String>, ClientError> {
        self.calls
            .borrow_mut()
            .push((source.to_string(), field.to_string()));
        self.values
            .get(&(source.to_string(), field.to_string()))
            .cloned()
            .ok_or_else(|| ClientError::UnknownField {
                table: source.to_string(),
                field: field.to_string(),
            })
    }
}

// =============================================================================
// MockClient
// =============================================================================

/// Client with scripted dispatch outcomes.
///
/// Commands without a scripted outcome get the default (`UnknownCommand`).
#[derive(Debug)]
pub struct MockClient {
    fields: StaticFields,
    responses: HashMap<String, DispatchOutcome>,
    failing: HashSet<String>,
    default: DispatchOutcome,
    dispatched: Vec<String>,
}

impl MockClient {
    pub fn new(fields: StaticFields) -> Self {
        Self {
            fields,
            responses: HashMap::new(),
            failing: HashSet::new(),
            default: DispatchOutcome::UnknownCommand,
            dispatched: Vec::new(),
        }
    }

    pub fn respond(mut self, command: &str, outcome: DispatchOutcome) -> Self {
        self.responses.insert(command.to_string(), outcome);
        self
    }

    /// Make dispatching `command` return a hard failure.
    pub fn fail_on(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    pub fn set_default(&mut self, outcome: DispatchOutcome) {
        self.default = outcome;
    }

    /// Commands dispatched so far, in order.
    pub fn dispatched(&self) -> &[String] {
        &self.dispatched
    }
}

impl FieldEnumerator for MockClient {
    fn list_values(&self, source: &str, field: &str) -> Result<Vec<String>, ClientError> {
        self.fields.list_values(source, field)
    }
}

impl CommandExecutor for MockClient {
    fn dispatch(&mut self, command: &str) -> Result<DispatchOutcome, ClientError> {
        self.dispatched.push(command.to_string());
        if self.failing.contains(command) {
            return Err(ClientError::failed(format!("{}: backend unavailable", command)));
        }
        Ok(self.responses.get(command).copied().unwrap_or(self.default))
    }
}

// =============================================================================
// ScriptedInput
// =============================================================================

/// Reader that replays fixed lines, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    completions: Vec<Vec<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown, including the one answered by end of input.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Completions offered with each prompt.
    pub fn completions(&self) -> &[Vec<String>] {
        &self.completions
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str, completions: &[String]) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.completions.push(completions.to_vec());
        Ok(self.lines.pop_front())
    }
}
