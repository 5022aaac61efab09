//! Journey lookup: one journey identifier in, one JSON document out.
//!
//! The provider's own success/failure signal decides the shape of the
//! output. Failures are never classified here; whatever code and message
//! the provider attaches are passed through.

use std::future::Future;

use serde::Serialize;
use tracing::debug;

use crate::config::Cli;
use crate::domain::{Journey, RoutePoint, ServiceMessage};
use crate::hafas::{HafasClient, HafasError, MockHafasClient, TripOptions};

/// Trait for providing journey status.
///
/// This abstraction allows the lookup to be tested without a network.
pub trait JourneyProvider {
    /// Fetch one journey by its provider identifier.
    fn journey(
        &self,
        id: &str,
        options: &TripOptions,
    ) -> impl Future<Output = Result<Journey, HafasError>> + Send;
}

impl JourneyProvider for HafasClient {
    fn journey(
        &self,
        id: &str,
        options: &TripOptions,
    ) -> impl Future<Output = Result<Journey, HafasError>> + Send {
        self.trip(id, options)
    }
}

impl JourneyProvider for MockHafasClient {
    fn journey(
        &self,
        id: &str,
        options: &TripOptions,
    ) -> impl Future<Output = Result<Journey, HafasError>> + Send {
        self.trip(id, options)
    }
}

/// Successful lookup, flattened for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyReport {
    pub id: String,
    pub operator: Option<String>,
    pub direction: Option<String>,
    pub polyline: Vec<RoutePoint>,

    /// True when every polyline point is a station, i.e. the route is a
    /// station sequence rather than a detailed trace.
    pub beeline: bool,

    pub messages: Vec<ServiceMessage>,
}

impl From<Journey> for JourneyReport {
    fn from(journey: Journey) -> Self {
        let beeline = is_beeline(&journey.polyline);
        Self {
            id: journey.id,
            operator: journey.operator,
            direction: journey.direction,
            polyline: journey.polyline,
            beeline,
            messages: journey.messages,
        }
    }
}

/// Failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error_code: String,
    pub error_string: String,
}

impl ErrorReport {
    pub fn new(error_code: impl Into<String>, error_string: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_string: error_string.into(),
        }
    }
}

impl From<&HafasError> for ErrorReport {
    fn from(err: &HafasError) -> Self {
        Self::new(err.error_code(), err.error_string())
    }
}

/// Outcome of one lookup. Serializes as exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JourneyQueryResult {
    Found(JourneyReport),
    Failed(ErrorReport),
}

impl JourneyQueryResult {
    /// Render as a single-line JSON document.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({"error_code": "JSON", "error_string": e.to_string()}).to_string()
        })
    }
}

impl From<ErrorReport> for JourneyQueryResult {
    fn from(report: ErrorReport) -> Self {
        JourneyQueryResult::Failed(report)
    }
}

/// Whether every point of a polyline carries an EVA code.
///
/// An empty polyline counts as a beeline.
pub fn is_beeline(points: &[RoutePoint]) -> bool {
    points.iter().all(RoutePoint::has_eva)
}

/// Look up one journey, always with the route polyline.
///
/// Makes exactly one provider call and never fails: provider errors are
/// folded into [`JourneyQueryResult::Failed`].
pub async fn lookup_journey<P: JourneyProvider>(provider: &P, id: &str) -> JourneyQueryResult {
    match provider.journey(id, &TripOptions::with_polyline()).await {
        Ok(journey) => {
            debug!(
                id = %journey.id,
                points = journey.polyline.len(),
                messages = journey.messages.len(),
                "journey found"
            );
            JourneyQueryResult::Found(journey.into())
        }
        Err(err) => {
            debug!(%id, error = %err, "journey lookup failed");
            JourneyQueryResult::Failed(ErrorReport::from(&err))
        }
    }
}

/// Look up one journey with the provider selected by the command line.
///
/// `--mock-dir` wins over the network client. A provider that cannot be
/// constructed is reported through the error shape like any other failure.
pub async fn run(cli: &Cli, id: &str) -> JourneyQueryResult {
    if let Some(dir) = &cli.mock_dir {
        return match MockHafasClient::new(dir) {
            Ok(client) => lookup_journey(&client, id).await,
            Err(e) => ErrorReport::from(&e).into(),
        };
    }

    match HafasClient::new(cli.hafas_config()) {
        Ok(client) => lookup_journey(&client, id).await,
        Err(e) => ErrorReport::from(&e).into(),
    }
}
