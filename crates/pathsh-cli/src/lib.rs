//! Command-line front end for the `pathsh` shell.
//!
//! Provides:
//! - [`Catalog`] / [`CatalogClient`] - JSON-described command table and client
//! - [`terminal`] - stdin/stdout and line-editor adapters

pub mod catalog;
pub mod terminal;

pub use catalog::{Catalog, CatalogClient, CatalogError, DEMO_CATALOG};
