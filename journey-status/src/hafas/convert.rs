//! Conversion from provider DTOs to domain types.
//!
//! Field-by-field and optional-safe: anything the provider leaves out is
//! left out of the domain value too.

use crate::domain::{Journey, RoutePoint, ServiceMessage};

use super::types::{Feature, RemarkDto, TripDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A polyline point did not carry at least `[lon, lat]`
    #[error("polyline point {index} has {len} coordinate(s), expected at least 2")]
    InvalidCoordinates { index: usize, len: usize },
}

/// Convert a trip into the domain journey.
pub fn convert_trip(trip: &TripDto) -> Result<Journey, ConversionError> {
    let operator = trip
        .line
        .as_ref()
        .and_then(|line| line.operator.as_ref())
        .and_then(|op| op.name.clone());

    let polyline = match &trip.polyline {
        Some(collection) => collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| convert_feature(index, feature))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let messages = trip
        .remarks
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_remark)
        .collect();

    Ok(Journey {
        id: trip.id.clone(),
        operator,
        direction: trip.direction.clone(),
        polyline,
        messages,
    })
}

/// Convert one GeoJSON feature. GeoJSON orders coordinates longitude first.
fn convert_feature(index: usize, feature: &Feature) -> Result<RoutePoint, ConversionError> {
    let coords = &feature.geometry.coordinates;
    let [lon, lat, ..] = coords.as_slice() else {
        return Err(ConversionError::InvalidCoordinates {
            index,
            len: coords.len(),
        });
    };

    let (eva, name) = match &feature.properties {
        Some(props) => (props.id.clone(), props.name.clone()),
        None => (None, None),
    };

    Ok(RoutePoint {
        lat: *lat,
        lon: *lon,
        eva,
        name,
    })
}

fn convert_remark(remark: &RemarkDto) -> ServiceMessage {
    ServiceMessage {
        short: remark.summary.clone(),
        text: remark.text.clone(),
        code: remark.code.clone(),
        kind: remark.kind.clone(),
    }
}
