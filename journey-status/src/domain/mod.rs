//! Domain types for journey status.
//!
//! Provider-neutral: the `hafas` module converts into these, and the
//! lookup renders them.

mod trip;

pub use trip::{Journey, RoutePoint, ServiceMessage};
