//! Trainset name table.
//!
//! Maps ICE/IC trainset identifiers (e.g. `ICE0304`) to the names the
//! units carry. The table is reference data: bundled with the crate,
//! loaded once, never mutated.

mod error;
mod lookup;
mod names;

pub use error::TrainsetError;
pub use lookup::{TABLE_ERROR_CODE, TrainsetLookup, lookup_trainset};
pub use names::{TrainsetName, TrainsetNames};
