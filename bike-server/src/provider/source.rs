//! The seam between request handling and wherever stations come from.

use std::future::Future;
use std::sync::Arc;

use crate::domain::{Coordinate, Station};
use crate::ranking::rank_by_distance;

use super::error::StationError;

/// A contract's station list, shared between the cache and its readers.
pub type Stations = Arc<Vec<Station>>;

/// Something that can list the stations of a contract.
///
/// Implemented by [`super::StationClient`] for live data and by
/// [`crate::cache::CachedStationSource`] for cached data. Tests provide
/// their own implementations.
pub trait StationSource: Send + Sync {
    /// Fetch every station in `contract`.
    fn fetch_stations(
        &self,
        contract: &str,
    ) -> impl Future<Output = Result<Stations, StationError>> + Send;
}

/// Fetch the stations of `contract`, nearest to `origin` first.
pub async fn fetch_stations_near<S: StationSource>(
    source: &S,
    contract: &str,
    origin: Coordinate,
) -> Result<Vec<Station>, StationError> {
    let stations = source.fetch_stations(contract).await?;
    Ok(rank_by_distance(&stations, origin))
}
