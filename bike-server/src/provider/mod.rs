//! Bike-share station provider.
//!
//! Fetches the live station list for a city network ("contract") from a
//! JCDecaux-style REST endpoint. There is no retry: a failed fetch is
//! reported to the caller as-is.

mod client;
mod error;
mod source;
mod types;

pub use client::{DEFAULT_CONTRACT, ProviderConfig, StationClient};
pub use error::StationError;
pub use source::{StationSource, Stations, fetch_stations_near};
