//! Trainset name lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::error::TrainsetError;

/// The bundled seed table, compiled into the binary. Complete tables are
/// supplied at runtime through [`TrainsetNames::load`].
const BUILTIN_TABLE: &str = include_str!("../../data/trainset_names.json");

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainsetName {
    /// Series + number, e.g. `ICE0304`.
    pub identifier: String,
    /// Ceremonial name; may contain emoji.
    pub name: String,
}

/// Read-only trainset identifier → name lookup.
///
/// Loaded once and never mutated. A different table is picked up by
/// loading a new one, not by editing this one.
#[derive(Debug, Clone, Default)]
pub struct TrainsetNames {
    names: HashMap<String, String>,
}

impl TrainsetNames {
    /// Build a lookup from table rows.
    ///
    /// Identifiers are not checked for uniqueness; a later row silently
    /// replaces an earlier one with the same identifier.
    pub fn from_entries(entries: impl IntoIterator<Item = TrainsetName>) -> Self {
        let names = entries
            .into_iter()
            .map(|row| (row.identifier, row.name))
            .collect();
        Self { names }
    }

    /// The table that ships with the crate.
    pub fn builtin() -> Result<Self, TrainsetError> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Load a table from a JSON file of `{"identifier", "name"}` rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrainsetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TrainsetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a table from JSON text.
    pub fn parse(json: &str) -> Result<Self, TrainsetError> {
        let rows: Vec<TrainsetName> =
            serde_json::from_str(json).map_err(|e| TrainsetError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(rows))
    }

    /// Look up a trainset name by exact identifier.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.names.get(identifier).map(String::as_str)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
