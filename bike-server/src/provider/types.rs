//! Provider wire types.
//!
//! The provider returns a bare JSON array of station objects. Only the
//! fields below are read; anything else in the payload is ignored.

use serde::Deserialize;

use crate::domain::{Coordinate, Station, StationStatus};

/// Position as the provider encodes it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionDto {
    pub lat: f64,
    pub lng: f64,
}

/// One station record from the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    pub address: String,
    pub position: PositionDto,
    pub status: String,
    pub available_bikes: u32,
    pub available_bike_stands: u32,
}

impl From<StationDto> for Station {
    fn from(dto: StationDto) -> Self {
        Station {
            number: dto.number,
            name: dto.name,
            address: dto.address,
            position: Coordinate::new(dto.position.lat, dto.position.lng),
            status: StationStatus::from_wire(&dto.status),
            available_bikes: dto.available_bikes,
            available_bike_stands: dto.available_bike_stands,
        }
    }
}

/// Parse a provider response body into domain stations.
pub fn parse_stations(body: &str) -> Result<Vec<Station>, serde_json::Error> {
    let dtos: Vec<StationDto> = serde_json::from_str(body)?;
    Ok(dtos.into_iter().map(Station::from).collect())
}
