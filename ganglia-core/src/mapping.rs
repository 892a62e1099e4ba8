//! Identifier-to-display-name mapping.
//!
//! Generated triples carry opaque identifiers; the mapping turns them into
//! names a dashboard can show. Unlike the reference corpus there is no
//! degraded mode: decoded output needs the mapping, so a missing or
//! unparsable file is an error the caller must treat as fatal.

use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The mapping document on disk. Only the `id2ent` field is read; a
/// document without it yields an empty map.
#[derive(Debug, Deserialize)]
struct MappingDocument {
    #[serde(default)]
    id2ent: HashMap<String, String>,
}

/// Identifier-to-name table with identity fallback.
///
/// # Example
///
/// ```rust
/// use ganglia_core::IdentifierMap;
///
/// let mapping = IdentifierMap::read(r#"{"id2ent": {"e1": "Alice"}}"#.as_bytes()).unwrap();
/// assert_eq!(mapping.resolve("e1"), "Alice");
/// assert_eq!(mapping.resolve("e999"), "e999");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdentifierMap {
    names: HashMap<String, String>,
}

impl IdentifierMap {
    /// Parse the mapping document from a reader.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let doc: MappingDocument = serde_json::from_reader(BufReader::new(reader))?;
        Ok(Self { names: doc.id2ent })
    }

    /// Load the mapping document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::MappingNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Self::read(file)
    }

    /// Resolve an identifier to its display name.
    ///
    /// Unmapped identifiers display as themselves.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Number of mapped identifiers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
