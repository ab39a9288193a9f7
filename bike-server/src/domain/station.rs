//! Bike-share station types.

use std::fmt;

use serde::Serialize;

use super::Coordinate;

/// Whether a station is accepting rentals and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StationStatus {
    Open,
    Closed,
}

impl StationStatus {
    /// Parse the provider's status string.
    ///
    /// Only `"OPEN"` counts as open; every other value is treated as closed.
    pub fn from_wire(s: &str) -> Self {
        if s == "OPEN" {
            StationStatus::Open
        } else {
            StationStatus::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, StationStatus::Open)
    }
}

/// What the user is looking for at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ResourceKind {
    /// A bike to pick up.
    #[default]
    Bikes,
    /// A free dock to return a bike to.
    Stands,
}

impl ResourceKind {
    /// Interpret the assistant's `type` parameter.
    ///
    /// `"stands"` selects [`ResourceKind::Stands`]; anything else, including a
    /// missing parameter, means bikes.
    ///
    /// ```
    /// use bike_server::domain::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::from_param(Some("stands")), ResourceKind::Stands);
    /// assert_eq!(ResourceKind::from_param(Some("bikes")), ResourceKind::Bikes);
    /// assert_eq!(ResourceKind::from_param(None), ResourceKind::Bikes);
    /// ```
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("stands") => ResourceKind::Stands,
            _ => ResourceKind::Bikes,
        }
    }

    /// The count of this resource currently available at `station`.
    pub fn count(&self, station: &Station) -> u32 {
        match self {
            ResourceKind::Bikes => station.available_bikes,
            ResourceKind::Stands => station.available_bike_stands,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Bikes => f.write_str("bikes"),
            ResourceKind::Stands => f.write_str("bike stands"),
        }
    }
}

/// A docking station as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Provider's station number, if reported.
    pub number: Option<u32>,

    /// Provider's display name, if reported.
    pub name: Option<String>,

    /// Street address, used in spoken and card text.
    pub address: String,

    pub position: Coordinate,

    pub status: StationStatus,

    /// Bikes ready to be picked up.
    pub available_bikes: u32,

    /// Empty docks ready to take a bike.
    pub available_bike_stands: u32,
}

impl Station {
    /// Create a station with the fields used for ranking and replies.
    pub fn new(
        address: impl Into<String>,
        position: Coordinate,
        status: StationStatus,
        available_bikes: u32,
        available_bike_stands: u32,
    ) -> Self {
        Self {
            number: None,
            name: None,
            address: address.into(),
            position,
            status,
            available_bikes,
            available_bike_stands,
        }
    }

    /// Distance from `origin` in kilometres.
    pub fn distance_from(&self, origin: &Coordinate) -> f64 {
        origin.distance_to(&self.position)
    }
}
