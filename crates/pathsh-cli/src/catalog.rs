//! JSON catalog client.
//!
//! A catalog lists the command patterns, the values behind each dynamic
//! segment, and optional shell settings:
//!
//! ```json
//! {
//!   "shell": { "prompt": "%PATH%> " },
//!   "patterns": ["user.add.?users_name"],
//!   "fields": { "users": { "name": ["alice", "bob"] } }
//! }
//! ```
//!
//! [`CatalogClient`] answers the shell from that table: full commands run,
//! prefixes of a full command are missing an item, anything else under a
//! known root is an unknown item.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use pathsh::core::{PatternSet, expand_full_commands};
use pathsh::{
    ClientError, CommandExecutor, DispatchOutcome, FieldEnumerator, PatternError, ShellConfig,
};
use serde::Deserialize;
use thiserror::Error;

/// Built-in catalog used when none is given on the command line.
pub const DEMO_CATALOG: &str = include_str!("../assets/demo.json");

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

// =============================================================================
// Catalog
// =============================================================================

/// Values per source, then per field.
pub type FieldTable = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub shell: ShellConfig,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub fields: FieldTable,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Enumerator and executor backed by a [`Catalog`].
///
/// Executed commands are reported on `out`.
pub struct CatalogClient<W> {
    patterns: PatternSet,
    fields: FieldTable,
    out: W,
}

impl<W: Write> CatalogClient<W> {
    pub fn new(catalog: &Catalog, out: W) -> Result<Self, CatalogError> {
        Ok(Self {
            patterns: PatternSet::new(&catalog.patterns)?,
            fields: catalog.fields.clone(),
            out,
        })
    }

    /// Every command that fills all segments of its pattern.
    fn full_commands(&self) -> Result<Vec<String>, ClientError> {
        expand_full_commands(&self.patterns, self)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> FieldEnumerator for CatalogClient<W> {
    fn list_values(&self, source: &str, field: &str) -> Result<Vec<String>, ClientError> {
        self.fields
            .get(source)
            .and_then(|fields| fields.get(field))
            .cloned()
            .ok_or_else(|| ClientError::UnknownField {
                table: source.to_string(),
                field: field.to_string(),
            })
    }
}

impl<W: Write> CommandExecutor for CatalogClient<W> {
    fn dispatch(&mut self, command: &str) -> Result<DispatchOutcome, ClientError> {
        let tokens: Vec<&str> = command.split_whitespace().collect();
        let Some(root) = tokens.first() else {
            return Ok(DispatchOutcome::UnknownCommand);
        };
        let normalized = tokens.join(" ");
        let full = self.full_commands()?;

        if full.contains(&normalized) {
            writeln!(self.out, "executing: {}", normalized)?;
            return Ok(DispatchOutcome::Done);
        }

        let prefix = format!("{} ", normalized);
        if full.iter().any(|c| c.starts_with(&prefix)) {
            return Ok(DispatchOutcome::MissingItem);
        }

        if full.iter().any(|c| c.split(' ').next() == Some(*root)) {
            return Ok(DispatchOutcome::UnknownItem);
        }

        Ok(DispatchOutcome::UnknownCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient<Vec<u8>> {
        let catalog = Catalog::demo().unwrap();
        CatalogClient::new(&catalog, Vec::new()).unwrap()
    }

    #[test]
    fn test_demo_catalog_parses() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.patterns.len(), 6);
        assert!(catalog.shell.is_quit("q"));
        assert_eq!(catalog.shell.prompt, "%PATH%> ");
    }

    #[test]
    fn test_missing_sections_default() {
        let catalog = Catalog::from_json(r#"{ "patterns": ["status"] }"#).unwrap();
        assert_eq!(catalog.shell, ShellConfig::default());
        assert!(catalog.fields.is_empty());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Catalog::from_json("{ patterns: }"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_pattern() {
        let catalog = Catalog::from_json(r#"{ "patterns": ["user.?users"] }"#).unwrap();
        assert!(matches!(
            CatalogClient::new(&catalog, Vec::new()),
            Err(CatalogError::Pattern(PatternError::MalformedMarker { .. }))
        ));
    }

    #[test]
    fn test_list_values() {
        let client = client();
        assert_eq!(
            client.list_values("groups", "name").unwrap(),
            vec!["admin", "staff"]
        );
        assert!(matches!(
            client.list_values("groups", "id"),
            Err(ClientError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_dispatch_classification() {
        let mut client = client();
        assert_eq!(client.dispatch("user list").unwrap(), DispatchOutcome::Done);
        assert_eq!(
            client.dispatch("user  remove   bob").unwrap(),
            DispatchOutcome::Done
        );
        assert_eq!(client.dispatch("user").unwrap(), DispatchOutcome::MissingItem);
        assert_eq!(
            client.dispatch("group member admin").unwrap(),
            DispatchOutcome::MissingItem
        );
        assert_eq!(
            client.dispatch("user remove dave").unwrap(),
            DispatchOutcome::UnknownItem
        );
        assert_eq!(client.dispatch("user list all").unwrap(), DispatchOutcome::UnknownItem);
        assert_eq!(client.dispatch("reboot").unwrap(), DispatchOutcome::UnknownCommand);
        assert_eq!(client.dispatch("").unwrap(), DispatchOutcome::UnknownCommand);

        let out = String::from_utf8(client.into_inner()).unwrap();
        assert_eq!(out, "executing: user list\nexecuting: user remove bob\n");
    }

    #[test]
    fn test_dispatch_value_with_space() {
        let catalog = Catalog::from_json(
            r#"{
              "patterns": ["user.remove.?users_name"],
              "fields": { "users": { "name": ["mary ann", "bob"] } }
            }"#,
        )
        .unwrap();
        let mut client = CatalogClient::new(&catalog, Vec::new()).unwrap();

        assert_eq!(
            client.dispatch("user remove mary ann").unwrap(),
            DispatchOutcome::Done
        );
        assert_eq!(
            client.dispatch("user remove mary").unwrap(),
            DispatchOutcome::MissingItem
        );

        let out = String::from_utf8(client.into_inner()).unwrap();
        assert_eq!(out, "executing: user remove mary ann\n");
    }

    #[test]
    fn test_load_reports_path() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/catalog.json"));
    }
}
