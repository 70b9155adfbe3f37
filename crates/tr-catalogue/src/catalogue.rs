//! The in-memory transit catalogue.
//!
//! # Data layout
//!
//! Stops and buses live in **append-only arenas** (`Vec<Stop>`, `Vec<Bus>`)
//! and are referenced everywhere by `StopId` / `BusId` index.  Name lookup
//! goes through `FxHashMap<String, _>` side indexes.  Arena order is
//! insertion order, which makes every enumeration the catalogue exposes
//! deterministic — the routing engine persists ids derived from it.
//!
//! # Distances
//!
//! Road distances are **directional**: `(a, b)` and `(b, a)` may differ
//! (one-way detours, terminal loops).  When only one direction is
//! configured, [`distance_m`](TransitCatalogue::distance_m) falls back to
//! the reverse entry.  A pair with neither direction configured yields
//! `None`; the engine builder treats that as a fatal configuration gap.

use rustc_hash::FxHashMap;

use tr_core::{BusId, CatalogueView, StopId};

use crate::{CatalogueError, CatalogueResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// A named location where passengers board or alight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name: String,
    /// `true` once at least one bus references this stop.  Only served
    /// stops receive routing-graph vertices.
    pub served: bool,
}

/// A named bus line with its direction-expanded stop sequence.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub name: String,
    /// Full driving order.  For a non-round-trip line `A,B,C` this is the
    /// expanded `A,B,C,B,A`; round trips are stored as given.
    pub stops: Vec<StopId>,
}

// ── TransitCatalogue ──────────────────────────────────────────────────────────

/// Stops, bus lines, and inter-stop road distances.
///
/// Callers populate the catalogue (directly or via the CSV loader), then
/// hand an immutable reference to the engine builder and stop mutating it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index: FxHashMap<String, BusId>,
    /// Directional distance in metres, keyed `(from, to)`.
    distances: FxHashMap<(StopId, StopId), f64>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Register a stop by name, or return the existing id if the name is
    /// already known.  Newly registered stops start unserved.
    pub fn add_stop(&mut self, name: &str) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            return id;
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { name: name.to_string(), served: false });
        self.stop_index.insert(name.to_string(), id);
        id
    }

    /// Register a bus line.
    ///
    /// Stops are auto-registered in first-mention order and marked served.
    /// When `round_trip` is `false` the sequence is direction-expanded:
    /// `A,B,C` becomes `A,B,C,B,A`, so the return direction is routable
    /// and asymmetric distances are honoured per direction.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[&str],
        round_trip: bool,
    ) -> CatalogueResult<BusId> {
        if self.bus_index.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyBus(name.to_string()));
        }

        let mut stops: Vec<StopId> = stop_names.iter().map(|s| self.add_stop(s)).collect();
        if !round_trip {
            // A,B,C → A,B,C,B,A: the line drives back, skipping the turnaround stop.
            for i in (0..stops.len() - 1).rev() {
                stops.push(stops[i]);
            }
        }
        for &stop in &stops {
            self.stops[stop.index()].served = true;
        }

        let id = BusId(self.buses.len() as u32);
        self.buses.push(Bus { name: name.to_string(), stops });
        self.bus_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Store the directional road distance from `from` to `to`, in metres.
    /// Both stops must already be registered.
    pub fn set_distance_m(&mut self, from: &str, to: &str, meters: f64) -> CatalogueResult<()> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Resolve a stop name to its arena id.
    pub fn stop_id(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }
}

// ── CatalogueView ─────────────────────────────────────────────────────────────

impl CatalogueView for TransitCatalogue {
    fn reachable_stop_names(&self) -> Vec<&str> {
        self.stops
            .iter()
            .filter(|s| s.served)
            .map(|s| s.name.as_str())
            .collect()
    }

    fn bus_names(&self) -> Vec<&str> {
        self.buses.iter().map(|b| b.name.as_str()).collect()
    }

    fn stops_for_bus(&self, bus: &str) -> &[StopId] {
        match self.bus_index.get(bus) {
            Some(&id) => &self.buses[id.index()].stops,
            None => &[],
        }
    }

    fn stop_name(&self, stop: StopId) -> &str {
        &self.stops[stop.index()].name
    }

    fn distance_m(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }
}
