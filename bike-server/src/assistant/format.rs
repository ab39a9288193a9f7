//! Reply text for selected stations.

use crate::domain::{ResourceKind, Station};

use super::response::{BasicCard, Button, OpenUrlAction};

/// Line separator in card text: a Markdown hard break.
const LINE_BREAK: &str = "  \n";

/// The sentence spoken for the nearest station.
pub fn spoken(station: &Station, kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Stands => format!(
            "There are {} available bike stands at {}.",
            station.available_bike_stands, station.address
        ),
        ResourceKind::Bikes => format!(
            "There are {} available bikes at {}.",
            station.available_bikes, station.address
        ),
    }
}

/// Counts for one station, the requested kind first.
fn counts_line(station: &Station, kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Stands => format!(
            "Stands: {}  (bikes: {})",
            station.available_bike_stands, station.available_bikes
        ),
        ResourceKind::Bikes => format!(
            "Bikes: {}  (stands: {})",
            station.available_bikes, station.available_bike_stands
        ),
    }
}

/// Card text for one station. The top station is the card title, so only
/// the others repeat their address.
fn station_text(station: &Station, kind: ResourceKind, include_address: bool) -> String {
    if include_address {
        format!(
            "**{}**{}{}",
            station.address,
            LINE_BREAK,
            counts_line(station, kind)
        )
    } else {
        counts_line(station, kind)
    }
}

/// Map link centred on `station`.
pub fn directions_url(station: &Station) -> String {
    format!(
        "https://www.google.com/maps/?q={},{}",
        station.position.latitude, station.position.longitude
    )
}

/// Card listing `stations`, titled with the first one.
///
/// Returns `None` when there is nothing to show.
pub fn card(stations: &[Station], kind: ResourceKind) -> Option<BasicCard> {
    let top = stations.first()?;

    let formatted_text = stations
        .iter()
        .enumerate()
        .map(|(i, s)| station_text(s, kind, i > 0))
        .collect::<Vec<_>>()
        .join(LINE_BREAK);

    Some(BasicCard {
        title: top.address.clone(),
        formatted_text,
        buttons: vec![Button {
            title: "Directions".to_string(),
            open_url_action: OpenUrlAction {
                url: directions_url(top),
            },
        }],
    })
}
