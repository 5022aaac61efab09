//! Provider REST API response DTOs.
//!
//! These types map directly to the JSON returned by the `hafas-rest-api`
//! trip endpoint. Only the fields the adapter reads are modelled; serde
//! ignores the rest. Nearly everything is `Option` because the provider
//! omits fields it has no data for.

use serde::Deserialize;

/// Response envelope from `GET /trips/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripResponse {
    pub trip: TripDto,
}

/// A single trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Provider trip ID (opaque, contains `|` and `#`).
    pub id: String,

    /// Direction label as shown on the train.
    pub direction: Option<String>,

    /// Line the trip runs on.
    pub line: Option<LineDto>,

    /// Route shape. Only present when requested with `polyline=true`.
    pub polyline: Option<FeatureCollection>,

    /// Hints, status and warning messages.
    pub remarks: Option<Vec<RemarkDto>>,
}

/// Line information.
#[derive(Debug, Clone, Deserialize)]
pub struct LineDto {
    pub operator: Option<OperatorDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperatorDto {
    /// Operator name, e.g. "DB Fernverkehr AG".
    pub name: Option<String>,
}

/// GeoJSON feature collection describing the route.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single polyline point.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Empty object for shape points; a stop or station for points that
    /// coincide with one.
    pub properties: Option<FeatureProperties>,

    pub geometry: PointGeometry,
}

/// Stop or station attached to a polyline point.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    /// EVA number of the stop.
    pub id: Option<String>,

    pub name: Option<String>,
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    /// `[longitude, latitude]`, optionally followed by altitude.
    pub coordinates: Vec<f64>,
}

/// A remark (service message) on a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct RemarkDto {
    /// `hint`, `status`, `warning`, ...
    #[serde(rename = "type")]
    pub kind: String,

    pub code: Option<String>,

    pub text: Option<String>,

    /// Short headline for the remark.
    pub summary: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: Option<String>,

    /// Client-level error code, e.g. `NOT_FOUND`.
    pub code: Option<String>,

    /// Raw HAFAS error code, e.g. `LOCATION`.
    pub hafas_code: Option<String>,

    pub hafas_message: Option<String>,
}

impl ErrorBody {
    /// True when the body carries at least one error field.
    pub fn is_provider_error(&self) -> bool {
        self.message.is_some()
            || self.code.is_some()
            || self.hafas_code.is_some()
            || self.hafas_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_trip_with_polyline() {
        let json = r#"{
            "trip": {
                "id": "1|200562|0|80|15102026",
                "direction": "München Hbf",
                "line": {
                    "type": "line",
                    "name": "ICE 1001",
                    "operator": {"type": "operator", "id": "db-fernverkehr-ag", "name": "DB Fernverkehr AG"}
                },
                "polyline": {
                    "type": "FeatureCollection",
                    "features": [
                        {
                            "type": "Feature",
                            "properties": {"type": "stop", "id": "8011160", "name": "Berlin Hbf"},
                            "geometry": {"type": "Point", "coordinates": [13.369549, 52.525589]}
                        },
                        {
                            "type": "Feature",
                            "properties": {},
                            "geometry": {"type": "Point", "coordinates": [13.2, 52.4]}
                        }
                    ]
                },
                "remarks": [
                    {"type": "hint", "code": "FK", "text": "Bicycles conveyed", "summary": "Bikes"}
                ]
            },
            "realtimeDataUpdatedAt": 1760533200
        }"#;

        let response: TripResponse = serde_json::from_str(json).unwrap();
        let trip = response.trip;

        assert_eq!(trip.id, "1|200562|0|80|15102026");
        assert_eq!(trip.direction.as_deref(), Some("München Hbf"));

        let operator = trip.line.unwrap().operator.unwrap();
        assert_eq!(operator.name.as_deref(), Some("DB Fernverkehr AG"));

        let features = trip.polyline.unwrap().features;
        assert_eq!(features.len(), 2);
        let stop = features[0].properties.as_ref().unwrap();
        assert_eq!(stop.id.as_deref(), Some("8011160"));
        assert_eq!(stop.name.as_deref(), Some("Berlin Hbf"));
        assert!(features[1].properties.as_ref().unwrap().id.is_none());
        assert_eq!(features[1].geometry.coordinates, vec![13.2, 52.4]);

        let remarks = trip.remarks.unwrap();
        assert_eq!(remarks[0].kind, "hint");
        assert_eq!(remarks[0].summary.as_deref(), Some("Bikes"));
    }

    #[test]
    fn deserialize_minimal_trip() {
        let json = r#"{"trip": {"id": "abc"}}"#;
        let response: TripResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.trip.id, "abc");
        assert!(response.trip.line.is_none());
        assert!(response.trip.polyline.is_none());
        assert!(response.trip.remarks.is_none());
    }

    #[test]
    fn deserialize_error_body() {
        let json = r#"{
            "message": "journey not found",
            "isHafasError": true,
            "code": "NOT_FOUND",
            "hafasCode": "LOCATION",
            "hafasMessage": "HAFAS Kernel: Location not found"
        }"#;

        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message.as_deref(), Some("journey not found"));
        assert_eq!(body.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(body.hafas_code.as_deref(), Some("LOCATION"));
        assert!(body.is_provider_error());
    }

    #[test]
    fn unrelated_json_is_not_an_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"status": "down"}"#).unwrap();
        assert!(!body.is_provider_error());
    }
}
