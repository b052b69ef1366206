// src/model/loader.rs
//! Snapshot loading for the CLI surface.
//!
//! The engine itself never touches the filesystem; this module turns a
//! JSON snapshot file into an indexed [`Catalog`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Catalog, Item};
use crate::error::{HelixdocError, Result};

/// On-disk snapshot: a flat list of items with parent references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<Item>,
}

/// Reads and indexes a catalog snapshot from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path).map_err(|source| HelixdocError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    Ok(Catalog::from_items(snapshot.items))
}
