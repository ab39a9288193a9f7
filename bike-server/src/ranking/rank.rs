//! Station ranking and selection.

use std::cmp::Ordering;

use crate::domain::{Coordinate, ResourceKind, Station};

/// Minimum count of the requested resource for a station to be suggested.
pub const MIN_AVAILABLE: u32 = 3;

/// How many stations a reply lists by default.
pub const DEFAULT_LIMIT: usize = 3;

/// Order stations nearest-first from `origin`.
///
/// Returns a new vector; the input is left untouched. Equidistant stations
/// are ordered by address so the result is deterministic.
pub fn rank_by_distance(stations: &[Station], origin: Coordinate) -> Vec<Station> {
    let mut keyed: Vec<(f64, &Station)> = stations
        .iter()
        .map(|s| (s.distance_from(&origin), s))
        .collect();

    keyed.sort_by(|(da, a), (db, b)| {
        let dist_cmp = da.total_cmp(db);
        if dist_cmp != Ordering::Equal {
            return dist_cmp;
        }
        a.address.cmp(&b.address)
    });

    keyed.into_iter().map(|(_, s)| s.clone()).collect()
}

/// Whether a station is worth suggesting for `kind`.
///
/// The station must be open and have at least [`MIN_AVAILABLE`] of the
/// requested resource.
pub fn is_suggested(station: &Station, kind: ResourceKind) -> bool {
    station.status.is_open() && kind.count(station) >= MIN_AVAILABLE
}

/// Pick the nearest suggested stations, at most `limit` of them.
///
/// Survivors keep their rank order. The result may be empty.
pub fn select_top(
    stations: &[Station],
    origin: Coordinate,
    kind: ResourceKind,
    limit: usize,
) -> Vec<Station> {
    rank_by_distance(stations, origin)
        .into_iter()
        .filter(|s| is_suggested(s, kind))
        .take(limit)
        .collect()
}

/// Filter an already-ranked list down to the suggested stations.
///
/// Same as [`select_top`] without re-ranking, for lists that come out of
/// [`crate::provider::fetch_stations_near`].
pub fn take_suggested(ranked: Vec<Station>, kind: ResourceKind, limit: usize) -> Vec<Station> {
    ranked
        .into_iter()
        .filter(|s| is_suggested(s, kind))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationStatus;

    fn station(addr: &str, lat: f64, lng: f64, bikes: u32, stands: u32) -> Station {
        Station::new(
            addr,
            Coordinate::new(lat, lng),
            StationStatus::Open,
            bikes,
            stands,
        )
    }

    fn closed(addr: &str, lat: f64, lng: f64, bikes: u32, stands: u32) -> Station {
        Station {
            status: StationStatus::Closed,
            ..station(addr, lat, lng, bikes, stands)
        }
    }

    fn addresses(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.address.as_str()).collect()
    }

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    #[test]
    fn rank_nearest_first() {
        let stations = vec![
            station("far", 0.0, 3.0, 5, 5),
            station("near", 0.0, 1.0, 5, 5),
            station("middle", 0.0, 2.0, 5, 5),
        ];

        let ranked = rank_by_distance(&stations, origin());
        assert_eq!(addresses(&ranked), vec!["near", "middle", "far"]);
    }

    #[test]
    fn rank_leaves_input_untouched() {
        let stations = vec![station("B", 0.0, 2.0, 5, 5), station("A", 0.0, 1.0, 5, 5)];
        let before = stations.clone();

        let _ = rank_by_distance(&stations, origin());
        assert_eq!(stations, before);
    }

    #[test]
    fn rank_ties_broken_by_address() {
        // Same distance, mirrored across the origin
        let stations = vec![station("Östra", 0.0, 1.0, 5, 5), station("Västra", 0.0, -1.0, 5, 5)];

        let ranked = rank_by_distance(&stations, origin());
        assert_eq!(addresses(&ranked), vec!["Västra", "Östra"]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank_by_distance(&[], origin()).is_empty());
    }

    #[test]
    fn suggested_threshold() {
        assert!(!is_suggested(&station("A", 0.0, 0.0, 2, 0), ResourceKind::Bikes));
        assert!(is_suggested(&station("A", 0.0, 0.0, 3, 0), ResourceKind::Bikes));
        assert!(!is_suggested(&station("A", 0.0, 0.0, 0, 2), ResourceKind::Stands));
        assert!(is_suggested(&station("A", 0.0, 0.0, 0, 3), ResourceKind::Stands));
    }

    #[test]
    fn suggested_uses_requested_kind() {
        let s = station("A", 0.0, 0.0, 10, 0);
        assert!(is_suggested(&s, ResourceKind::Bikes));
        assert!(!is_suggested(&s, ResourceKind::Stands));
    }

    #[test]
    fn closed_never_suggested() {
        let s = closed("A", 0.0, 0.0, 50, 50);
        assert!(!is_suggested(&s, ResourceKind::Bikes));
        assert!(!is_suggested(&s, ResourceKind::Stands));
    }

    #[test]
    fn select_bikes() {
        let stations = vec![station("A", 0.0, 0.0, 5, 1), station("B", 0.0, 1.0, 0, 10)];

        let ranked = rank_by_distance(&stations, origin());
        assert_eq!(addresses(&ranked), vec!["A", "B"]);

        let top = select_top(&stations, origin(), ResourceKind::Bikes, DEFAULT_LIMIT);
        assert_eq!(addresses(&top), vec!["A"]);
    }

    #[test]
    fn select_stands() {
        let stations = vec![station("A", 0.0, 0.0, 5, 1), station("B", 0.0, 1.0, 0, 10)];

        let top = select_top(&stations, origin(), ResourceKind::Stands, DEFAULT_LIMIT);
        assert_eq!(addresses(&top), vec!["B"]);
        assert_eq!(top[0].available_bike_stands, 10);
    }

    #[test]
    fn select_truncates_to_limit() {
        let stations: Vec<Station> = (0..10)
            .map(|i| station(&format!("S{i}"), 0.0, f64::from(i) * 0.01, 5, 5))
            .collect();

        let top = select_top(&stations, origin(), ResourceKind::Bikes, DEFAULT_LIMIT);
        assert_eq!(addresses(&top), vec!["S0", "S1", "S2"]);
    }

    #[test]
    fn select_skips_unsuitable_but_keeps_order() {
        let stations = vec![
            station("d", 0.0, 0.04, 9, 9),
            closed("a", 0.0, 0.01, 9, 9),
            station("c", 0.0, 0.03, 9, 9),
            station("b", 0.0, 0.02, 1, 9),
            station("e", 0.0, 0.05, 9, 9),
        ];

        let top = select_top(&stations, origin(), ResourceKind::Bikes, DEFAULT_LIMIT);
        assert_eq!(addresses(&top), vec!["c", "d", "e"]);
    }

    #[test]
    fn select_empty_when_nothing_qualifies() {
        let stations = vec![station("A", 0.0, 0.0, 0, 0), closed("B", 0.0, 1.0, 9, 9)];

        let top = select_top(&stations, origin(), ResourceKind::Bikes, DEFAULT_LIMIT);
        assert!(top.is_empty());
    }

    #[test]
    fn take_suggested_matches_select_top() {
        let stations = vec![
            station("A", 0.0, 0.3, 4, 4),
            station("B", 0.0, 0.1, 0, 4),
            station("C", 0.0, 0.2, 4, 0),
        ];

        let ranked = rank_by_distance(&stations, origin());
        for kind in [ResourceKind::Bikes, ResourceKind::Stands] {
            assert_eq!(
                take_suggested(ranked.clone(), kind, DEFAULT_LIMIT),
                select_top(&stations, origin(), kind, DEFAULT_LIMIT)
            );
        }
    }
}
