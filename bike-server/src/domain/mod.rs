//! Core domain types for the bike station finder.
//!
//! These types are independent of the provider's wire format and of the
//! assistant platform's payloads.

mod coordinate;
mod station;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, distance};
pub use station::{ResourceKind, Station, StationStatus};
