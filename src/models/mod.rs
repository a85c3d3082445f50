//! Data models shared by the shell and its terminal adapters.
//!
//! - [`ResolvedPath`] - The confirmed portion of the command being built
//! - [`OutputLine`], [`LineReader`], [`LineWriter`] - Terminal-facing types

mod path;
mod terminal;

pub use path::ResolvedPath;
pub use terminal::{LineReader, LineWriter, OutputLine, render_prompt};
