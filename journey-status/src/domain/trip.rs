//! Journey status as reported by the provider.
//!
//! These types are the provider-neutral view of one trip: where it runs,
//! who runs it, and what the provider has to say about it. Fields the
//! provider leaves out stay `None`; nothing here invents defaults.

use serde::Serialize;

/// One point on a journey's route polyline.
///
/// Points that coincide with a station carry its EVA code and name.
/// Intermediate shape points only have coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
    pub eva: Option<String>,
    pub name: Option<String>,
}

impl RoutePoint {
    /// A bare geometry point with no station attached.
    #[cfg(test)]
    pub(crate) fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            eva: None,
            name: None,
        }
    }

    /// A point at a station.
    #[cfg(test)]
    pub(crate) fn station(
        lat: f64,
        lon: f64,
        eva: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            lat,
            lon,
            eva: Some(eva.into()),
            name: Some(name.into()),
        }
    }

    /// Whether this point identifies a station.
    pub fn has_eva(&self) -> bool {
        self.eva.is_some()
    }
}

/// A service message attached to a journey (delay reason, construction
/// notice, on-board service hint, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceMessage {
    /// Short form of the message, if the provider has one.
    pub short: Option<String>,

    /// Full message text.
    pub text: Option<String>,

    /// Provider-specific message code.
    pub code: Option<String>,

    /// Message category, passed through verbatim.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single journey as returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Provider journey identifier.
    pub id: String,

    /// Operating company name.
    pub operator: Option<String>,

    /// Direction / destination label shown on the train.
    pub direction: Option<String>,

    /// Route polyline in travel order.
    pub polyline: Vec<RoutePoint>,

    /// Service messages in provider order.
    pub messages: Vec<ServiceMessage>,
}
