//! Read-only seam between the routing engine and the transit catalogue.
//!
//! The engine never mutates the catalogue and never sees its storage; it
//! consumes exactly the queries below.  `tr-catalogue` provides the real
//! implementation; tests build tiny hand-crafted views without pulling in
//! the loader.

use crate::StopId;

/// The catalogue queries the graph builder consumes.
///
/// # Determinism
///
/// [`reachable_stop_names`](CatalogueView::reachable_stop_names) and
/// [`bus_names`](CatalogueView::bus_names) must return the same order on
/// every call for a given catalogue state: the former fixes vertex
/// numbering, the latter fixes edge numbering, and both are persisted.
///
/// # Contract
///
/// Callers must not mutate the underlying catalogue after handing a view to
/// the engine builder; the engine is built once per catalogue and treated
/// as immutable thereafter.
pub trait CatalogueView {
    /// Names of stops served by at least one bus, in a stable order.
    /// Unserved stops receive no graph vertex and are unroutable.
    fn reachable_stop_names(&self) -> Vec<&str>;

    /// Names of all bus lines, in a stable order.
    fn bus_names(&self) -> Vec<&str>;

    /// The ordered, direction-expanded stop sequence of `bus`.
    fn stops_for_bus(&self, bus: &str) -> &[StopId];

    /// The name of a stop by arena id.
    fn stop_name(&self, stop: StopId) -> &str;

    /// Directional road distance in metres between two adjacent stops.
    ///
    /// Implementations may fall back to the reverse direction when only one
    /// direction is configured.  `None` means the pair has no distance at
    /// all — a configuration gap the builder treats as fatal.
    fn distance_m(&self, from: StopId, to: StopId) -> Option<f64>;
}
