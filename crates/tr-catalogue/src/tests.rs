//! Unit tests for tr-catalogue.
//!
//! All tests use hand-crafted catalogues or in-memory CSV; no files.

#[cfg(test)]
mod arena {
    use tr_core::{CatalogueView, StopId};

    use crate::TransitCatalogue;

    #[test]
    fn add_stop_is_idempotent() {
        let mut c = TransitCatalogue::new();
        let a1 = c.add_stop("Airport");
        let a2 = c.add_stop("Airport");
        assert_eq!(a1, a2);
        assert_eq!(c.stop_count(), 1);
    }

    #[test]
    fn stop_ids_follow_insertion_order() {
        let mut c = TransitCatalogue::new();
        assert_eq!(c.add_stop("A"), StopId(0));
        assert_eq!(c.add_stop("B"), StopId(1));
        assert_eq!(c.add_stop("A"), StopId(0));
        assert_eq!(c.stop_id("B").unwrap(), StopId(1));
    }

    #[test]
    fn unknown_stop_lookup_fails() {
        let c = TransitCatalogue::new();
        assert!(c.stop_id("Nowhere").is_err());
    }

    #[test]
    fn only_bus_served_stops_are_reachable() {
        let mut c = TransitCatalogue::new();
        c.add_stop("Orphan");
        c.add_bus("1", &["A", "B"], true).unwrap();
        let reachable = c.reachable_stop_names();
        assert_eq!(reachable, vec!["A", "B"]);
    }
}

#[cfg(test)]
mod buses {
    use tr_core::CatalogueView;

    use crate::{CatalogueError, TransitCatalogue};

    #[test]
    fn round_trip_kept_as_given() {
        let mut c = TransitCatalogue::new();
        c.add_bus("7", &["A", "B", "A"], true).unwrap();
        let stops = c.stops_for_bus("7");
        let names: Vec<&str> = stops.iter().map(|&s| c.stop_name(s)).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
    }

    #[test]
    fn non_round_trip_expands_back() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B", "C"], false).unwrap();
        let names: Vec<&str> = c
            .stops_for_bus("1")
            .iter()
            .map(|&s| c.stop_name(s))
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "B", "A"]);
    }

    #[test]
    fn single_stop_line_does_not_duplicate() {
        let mut c = TransitCatalogue::new();
        c.add_bus("shuttle", &["A"], false).unwrap();
        assert_eq!(c.stops_for_bus("shuttle").len(), 1);
    }

    #[test]
    fn duplicate_bus_rejected() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B"], true).unwrap();
        let err = c.add_bus("1", &["C", "D"], true).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateBus(_)));
    }

    #[test]
    fn empty_bus_rejected() {
        let mut c = TransitCatalogue::new();
        let err = c.add_bus("ghost", &[], true).unwrap_err();
        assert!(matches!(err, CatalogueError::EmptyBus(_)));
    }

    #[test]
    fn unknown_bus_has_no_stops() {
        let c = TransitCatalogue::new();
        assert!(c.stops_for_bus("404").is_empty());
    }
}

#[cfg(test)]
mod distances {
    use tr_core::CatalogueView;

    use crate::TransitCatalogue;

    #[test]
    fn directional_entries_are_independent() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B"], true).unwrap();
        c.set_distance_m("A", "B", 1000.0).unwrap();
        c.set_distance_m("B", "A", 1500.0).unwrap();
        let a = c.stop_id("A").unwrap();
        let b = c.stop_id("B").unwrap();
        assert_eq!(c.distance_m(a, b), Some(1000.0));
        assert_eq!(c.distance_m(b, a), Some(1500.0));
    }

    #[test]
    fn reverse_fallback_when_one_direction_missing() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B"], true).unwrap();
        c.set_distance_m("A", "B", 1000.0).unwrap();
        let a = c.stop_id("A").unwrap();
        let b = c.stop_id("B").unwrap();
        assert_eq!(c.distance_m(b, a), Some(1000.0));
    }

    #[test]
    fn unconfigured_pair_is_none() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B"], true).unwrap();
        let a = c.stop_id("A").unwrap();
        let b = c.stop_id("B").unwrap();
        assert_eq!(c.distance_m(a, b), None);
    }

    #[test]
    fn distance_requires_known_stops() {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B"], true).unwrap();
        assert!(c.set_distance_m("A", "Nowhere", 100.0).is_err());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tr_core::CatalogueView;

    use crate::{load_catalogue, CatalogueError};

    const BUSES: &str = "\
name,stops,round_trip
1,A;B;C,false
7,Depot;A;Depot,true
";

    const DISTANCES: &str = "\
from,to,meters
A,B,3000
B,C,4200
C,B,4200
B,A,3000
Depot,A,900
A,Depot,900
";

    #[test]
    fn loads_buses_and_distances() {
        let c = load_catalogue(Cursor::new(BUSES), Cursor::new(DISTANCES)).unwrap();
        assert_eq!(c.bus_count(), 2);
        // Stop arena order = first mention across bus rows.
        assert_eq!(c.reachable_stop_names(), vec!["A", "B", "C", "Depot"]);
        // Non-round-trip expanded on load.
        assert_eq!(c.stops_for_bus("1").len(), 5);
        let a = c.stop_id("A").unwrap();
        let b = c.stop_id("B").unwrap();
        assert_eq!(c.distance_m(a, b), Some(3000.0));
    }

    #[test]
    fn distance_row_with_unknown_stop_fails() {
        let distances = "from,to,meters\nA,Nowhere,500\n";
        let err = load_catalogue(Cursor::new(BUSES), Cursor::new(distances)).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(_)));
    }

    #[test]
    fn non_positive_distance_fails() {
        let distances = "from,to,meters\nA,B,0\n";
        let err = load_catalogue(Cursor::new(BUSES), Cursor::new(distances)).unwrap_err();
        assert!(matches!(err, CatalogueError::Parse(_)));
    }

    #[test]
    fn malformed_bus_row_fails() {
        let buses = "name,stops,round_trip\n1,A;B,maybe\n";
        let err = load_catalogue(Cursor::new(buses), Cursor::new("from,to,meters\n")).unwrap_err();
        assert!(matches!(err, CatalogueError::Parse(_)));
    }

    #[test]
    fn blank_stop_entries_are_skipped() {
        let buses = "name,stops,round_trip\n1,A; ;B,true\n";
        let c = load_catalogue(Cursor::new(buses), Cursor::new("from,to,meters\n")).unwrap();
        assert_eq!(c.stops_for_bus("1").len(), 2);
    }
}
