//! Core shell logic.
//!
//! This module provides:
//! - [`PatternSet`] validation and [`expand_patterns`] candidate expansion
//! - [`Shell`] read-eval loop with [`recover_path`] path recovery
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod client;
mod completion;
pub mod error;
mod expand;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod pattern;
mod recovery;
mod shell;

pub use client::{CommandExecutor, DispatchOutcome, FieldEnumerator};
pub use completion::{AutocompleteResult, autocomplete, find_common_prefix, get_hint};
pub use expand::{expand_full_commands, expand_patterns};
pub use pattern::{Pattern, PatternSet, Segment};
pub use recovery::{common_part, recover_path};
pub use shell::{Shell, ShellExit, Step};
