//! CSV catalogue loader.
//!
//! # CSV formats
//!
//! **Buses** — one row per line; stops are semicolon-separated in driving
//! order (outbound only for non-round-trips; expansion happens on load):
//!
//! ```csv
//! name,stops,round_trip
//! 1,A;B;C,false
//! 7,Depot;A;Depot,true
//! ```
//!
//! **Distances** — one row per directional adjacent pair, in metres:
//!
//! ```csv
//! from,to,meters
//! A,B,3000
//! B,C,4200
//! ```
//!
//! Bus rows are scanned first, so stops are created in first-mention order —
//! that order fixes the engine's vertex numbering, which must be
//! reproducible for persistence round-trips.  Distance rows may only
//! reference stops some bus mentions; anything else is a configuration
//! mistake surfaced as [`CatalogueError::UnknownStop`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CatalogueError, CatalogueResult, TransitCatalogue};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BusRecord {
    name:       String,
    stops:      String,
    round_trip: bool,
}

#[derive(Deserialize)]
struct DistanceRecord {
    from:   String,
    to:     String,
    meters: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalogue from bus and distance CSV files.
pub fn load_catalogue_files(buses: &Path, distances: &Path) -> CatalogueResult<TransitCatalogue> {
    let buses = std::fs::File::open(buses).map_err(CatalogueError::Io)?;
    let distances = std::fs::File::open(distances).map_err(CatalogueError::Io)?;
    load_catalogue(buses, distances)
}

/// Like [`load_catalogue_files`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from network
/// streams.
pub fn load_catalogue<B: Read, D: Read>(buses: B, distances: D) -> CatalogueResult<TransitCatalogue> {
    let mut catalogue = TransitCatalogue::new();

    // ── Bus rows first: they define the stop arena order ──────────────────
    let mut bus_reader = csv::Reader::from_reader(buses);
    for result in bus_reader.deserialize::<BusRecord>() {
        let row = result.map_err(|e| CatalogueError::Parse(e.to_string()))?;
        let stops = split_stop_list(&row.name, &row.stops)?;
        let stop_refs: Vec<&str> = stops.iter().map(String::as_str).collect();
        catalogue.add_bus(&row.name, &stop_refs, row.round_trip)?;
    }

    // ── Distance rows ─────────────────────────────────────────────────────
    let mut distance_reader = csv::Reader::from_reader(distances);
    for result in distance_reader.deserialize::<DistanceRecord>() {
        let row = result.map_err(|e| CatalogueError::Parse(e.to_string()))?;
        if !(row.meters.is_finite() && row.meters > 0.0) {
            return Err(CatalogueError::Parse(format!(
                "distance {} -> {} must be positive, got {}",
                row.from, row.to, row.meters
            )));
        }
        catalogue.set_distance_m(&row.from, &row.to, row.meters)?;
    }

    Ok(catalogue)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_stop_list(bus: &str, raw: &str) -> CatalogueResult<Vec<String>> {
    let stops: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if stops.is_empty() {
        return Err(CatalogueError::EmptyBus(bus.to_string()));
    }
    Ok(stops)
}
