//! Trainset lookup rendered as a JSON document.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::names::TrainsetNames;

/// Error code reported when the table cannot be loaded.
pub const TABLE_ERROR_CODE: &str = "TRAINSETS";

/// Outcome of one trainset lookup.
///
/// An unknown identifier is still an answer (`name` is `null`); only a
/// table that cannot be loaded produces the error shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrainsetLookup {
    Answered {
        identifier: String,
        name: Option<String>,
    },
    TableUnavailable {
        error_code: String,
        error_string: String,
    },
}

impl TrainsetLookup {
    /// Render as a single-line JSON document.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({"error_code": "JSON", "error_string": e.to_string()}).to_string()
        })
    }
}

/// Look up `id` in the table at `names`, or in the bundled table.
pub fn lookup_trainset(id: &str, names: Option<&Path>) -> TrainsetLookup {
    let table = match names {
        Some(path) => TrainsetNames::load(path),
        None => TrainsetNames::builtin(),
    };

    match table {
        Ok(table) => {
            debug!(entries = table.len(), "loaded trainset table");
            TrainsetLookup::Answered {
                identifier: id.to_string(),
                name: table.get(id).map(str::to_string),
            }
        }
        Err(e) => {
            debug!(error = %e, "trainset table unavailable");
            TrainsetLookup::TableUnavailable {
                error_code: TABLE_ERROR_CODE.to_string(),
                error_string: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn known_identifier_from_bundled_table() {
        let document = lookup_trainset("ICE0304", None).to_json();

        assert_eq!(
            document,
            "{\"identifier\":\"ICE0304\",\"name\":\"\u{1F3F3}\u{FE0F}\u{200D}\u{1F308} München\"}"
        );
    }

    #[test]
    fn unknown_identifier_has_null_name() {
        let document = lookup_trainset("ICE9999", None).to_json();

        assert_eq!(document, r#"{"identifier":"ICE9999","name":null}"#);
    }

    #[test]
    fn replacement_table_is_used_instead_of_bundled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"[{"identifier": "ICE0304", "name": "Renamed"}]"#).unwrap();

        let result = lookup_trainset("ICE0304", Some(&path));

        assert_eq!(
            result,
            TrainsetLookup::Answered {
                identifier: "ICE0304".to_string(),
                name: Some("Renamed".to_string()),
            }
        );
    }

    #[test]
    fn missing_table_file_is_error_document() {
        let result = lookup_trainset("ICE0304", Some(Path::new("/nonexistent/names.json")));

        let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(value["error_code"], "TRAINSETS");
        assert!(
            value["error_string"]
                .as_str()
                .unwrap()
                .contains("/nonexistent/names.json")
        );
    }

    #[test]
    fn malformed_table_file_is_error_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"{"ICE0304": "München"}"#).unwrap();

        match lookup_trainset("ICE0304", Some(&path)) {
            TrainsetLookup::TableUnavailable { error_code, .. } => {
                assert_eq!(error_code, TABLE_ERROR_CODE)
            }
            other => panic!("expected table error, got {other:?}"),
        }
    }
}
