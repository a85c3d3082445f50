//! Hierarchical command-path shell.
//!
//! Registered commands are `.`-joined patterns such as `user.remove.?users_name`,
//! where `?source_field` segments are filled in at runtime. The [`Shell`] offers
//! the reachable commands as completions, dispatches each typed line to a
//! client, and on a "missing item" answer keeps the prompt positioned at the
//! part of the path that was valid.

pub mod config;
pub mod core;
pub mod models;

pub use crate::config::ShellConfig;
pub use crate::core::error::{ClientError, PatternError, ShellError};
pub use crate::core::{
    CommandExecutor, DispatchOutcome, FieldEnumerator, Shell, ShellExit, autocomplete, get_hint,
};
pub use crate::models::{LineReader, LineWriter, OutputLine, ResolvedPath};
