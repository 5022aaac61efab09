//! Journey-status provider client.
//!
//! Talks to a `hafas-rest-api` instance (by default the public
//! `v6.db.transport.rest`), which fronts the Deutsche Bahn HAFAS backend.
//!
//! Key characteristics of the provider:
//! - Trip IDs are opaque and contain `|` and `#`, so they must be
//!   percent-encoded as a single path segment
//! - The route polyline is GeoJSON with `[lon, lat]` coordinates; points
//!   that coincide with a stop carry the stop's EVA number as `id`
//! - Errors come back as JSON with both a client code and a raw HAFAS code

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HafasClient, HafasConfig, TripOptions};
pub use convert::ConversionError;
pub use error::HafasError;
pub use mock::MockHafasClient;
