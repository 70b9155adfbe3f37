//! `tr-engine` — the transit routing engine.
//!
//! Translates a catalogue view into a weighted wait/ride graph, eagerly
//! precomputes all-pairs shortest travel times, and answers point-to-point
//! queries by walking precomputed predecessor edges.  Single-threaded and
//! synchronous throughout; the graph and table are immutable after
//! construction.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`graph`]     | `TransitGraph`, `EdgeLabel`, `build_graph`        |
//! | [`solver`]    | `RoutingTable`, `solve`                           |
//! | [`itinerary`] | `Itinerary`, `Step`                               |
//! | [`engine`]    | `TransitRouter`, `EngineParts`                    |
//! | [`error`]     | `EngineError`, `EngineResult`                     |

pub mod engine;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod solver;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{EngineParts, TransitRouter};
pub use error::{EngineError, EngineResult};
pub use graph::{build_graph, EdgeLabel, GraphParts, TransitGraph};
pub use itinerary::{Itinerary, Step};
pub use solver::{solve, RouteEntry, RoutingTable};
