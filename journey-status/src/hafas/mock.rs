//! Mock provider client for testing without network access.
//!
//! Loads trip responses from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::Journey;

use super::client::TripOptions;
use super::convert::convert_trip;
use super::error::HafasError;
use super::types::{TripDto, TripResponse};

/// Mock provider client that serves trips from JSON files.
#[derive(Debug, Clone)]
pub struct MockHafasClient {
    /// Pre-loaded trips, keyed by trip ID.
    trips: Arc<HashMap<String, TripDto>>,
}

impl MockHafasClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Each `*.json` file holds one `GET /trips/{id}` response body. Trips
    /// are keyed by the `id` inside the file, not by the file name, since
    /// trip IDs are not valid file names.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, HafasError> {
        let data_dir = data_dir.as_ref();
        let mut trips = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            HafasError::MockData(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| HafasError::MockData(format!("failed to read directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                HafasError::MockData(format!("failed to read {}: {e}", path.display()))
            })?;

            let response: TripResponse = serde_json::from_str(&json).map_err(|e| {
                HafasError::MockData(format!("failed to parse {}: {e}", path.display()))
            })?;

            debug!(id = %response.trip.id, file = %path.display(), "loaded mock trip");
            trips.insert(response.trip.id.clone(), response.trip);
        }

        if trips.is_empty() {
            return Err(HafasError::MockData(format!(
                "no mock trip files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            trips: Arc::new(trips),
        })
    }

    /// Get a trip by ID.
    ///
    /// Mimics [`HafasClient::trip`](super::HafasClient::trip): the polyline
    /// is dropped unless requested, and so are remarks.
    pub async fn trip(&self, id: &str, options: &TripOptions) -> Result<Journey, HafasError> {
        let mut trip = self
            .trips
            .get(id)
            .cloned()
            .ok_or_else(|| HafasError::Provider {
                code: "NOT_FOUND".to_string(),
                message: format!("no mock data for journey {id}"),
            })?;

        if !options.polyline {
            trip.polyline = None;
        }
        if !options.remarks {
            trip.remarks = None;
        }

        convert_trip(&trip).map_err(|e| HafasError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// IDs of all loaded trips.
    #[cfg(test)]
    fn available_trips(&self) -> Vec<&str> {
        self.trips.keys().map(String::as_str).collect()
    }
}
