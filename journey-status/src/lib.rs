//! Journey status lookup and trainset names.
//!
//! Two independent pieces: a read-only table of ICE/IC trainset names,
//! and an adapter that fetches one journey's route polyline and service
//! messages from a HAFAS-backed provider and renders them as JSON.

pub mod config;
pub mod domain;
pub mod hafas;
pub mod logging;
pub mod lookup;
pub mod trainsets;
