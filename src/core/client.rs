//! Collaborators the shell drives.
//!
//! The shell never executes anything itself: dynamic segments are filled by a
//! [`FieldEnumerator`] and every command line goes to a [`CommandExecutor`].

use crate::core::error::ClientError;

/// Outcome of dispatching one command line.
///
/// The three soft failures are expected during normal use and are handled by
/// the shell; a hard failure is returned as `Err(ClientError)` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Command was accepted and run
    Done,
    /// Valid prefix of a known command, more segments needed
    MissingItem,
    /// Known command, unknown item within it
    UnknownItem,
    /// Not a command at all
    UnknownCommand,
}

/// Supplies the concrete values of a dynamic segment.
pub trait FieldEnumerator {
    /// List the values for `source`/`field`. Called once per dynamic segment
    /// occurrence during an expansion.
    fn list_values(&self, source: &str, field: &str) -> Result<Vec<String>, ClientError>;
}

/// Runs command lines on behalf of the shell.
pub trait CommandExecutor {
    fn dispatch(&mut self, command: &str) -> Result<DispatchOutcome, ClientError>;
}

impl<T: FieldEnumerator + ?Sized> FieldEnumerator for &T {
    fn list_values(&self, source: &str, field: &str) -> Result<Vec<String>, ClientError> {
        (**self).list_values(source, field)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &mut T {
    fn dispatch(&mut self, command: &str) -> Result<DispatchOutcome, ClientError> {
        (**self).dispatch(command)
    }
}
