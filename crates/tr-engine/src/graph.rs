//! Routing graph representation and builder.
//!
//! # Vertex pairing
//!
//! Every reachable stop `i` owns two vertices: `2i` models *waiting at the
//! stop* and `2i + 1` models *on board, ready to ride*.  A wait edge
//! `2i → 2i+1` (weight = configured wait time) charges the boarding delay
//! exactly once per boarding; ride edges run board-vertex → wait-vertex, so
//! every transfer passes through another wait edge.
//!
//! # Data layout
//!
//! Edges live in an **ordered list**: an edge's id is its insertion
//! position.  Insertion order is fixed (all wait edges in stop order, then
//! ride edges by bus, start position, end position), so ids are
//! reproducible across builds — persisted predecessor ids stay valid after
//! reload.  Per-vertex incidence lists index into the edge list.  This is
//! deliberately *not* a CSR layout: CSR sorts edges by source vertex, which
//! would renumber them.
//!
//! # Density
//!
//! One ride edge per ordered stop pair of each line is quadratic in route
//! length.  The density is the point: the solver precomputes all pairs once
//! and queries become O(path length) table walks.

use rustc_hash::FxHashMap;

use tr_core::{ride_minutes, BusId, CatalogueView, EdgeId, RoutingConfig, StopId, VertexId};

use crate::{EngineError, EngineResult};

// ── Vertex pairing helpers ────────────────────────────────────────────────────

/// The "waiting at the stop" vertex of reachable stop `stop`.
#[inline]
pub fn wait_vertex(stop: StopId) -> VertexId {
    VertexId(stop.0 * 2)
}

/// The "on board, ready to ride" vertex of reachable stop `stop`.
#[inline]
pub fn board_vertex(stop: StopId) -> VertexId {
    VertexId(stop.0 * 2 + 1)
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// A directed weighted edge.  Weights are non-negative minutes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    pub from:       VertexId,
    pub to:         VertexId,
    pub weight_min: f64,
}

/// What an edge means in itinerary terms.
///
/// The `StopId`/`BusId` here index the engine's own name tables
/// (`stop_names` / `bus_names` in [`crate::EngineParts`]), **not** the
/// catalogue arenas — the engine must answer queries with no catalogue in
/// sight after a persistence reload.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeLabel {
    /// Boarding delay at a stop.
    Wait { stop: StopId },
    /// Riding a bus across `span_count` stop-to-stop hops.
    Ride {
        bus:        BusId,
        span_count: u32,
        minutes:    f64,
    },
}

/// Ordered edge list plus per-vertex outgoing incidence lists.
///
/// Immutable once built; construct via [`build_graph`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitGraph {
    edges:     Vec<GraphEdge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl TransitGraph {
    pub(crate) fn with_vertices(vertex_count: usize) -> Self {
        Self {
            edges:     Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId, weight_min: f64) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(GraphEdge { from, to, weight_min });
        self.incidence[from.index()].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &GraphEdge {
        &self.edges[id.index()]
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Ids of all outgoing edges from `vertex`, in insertion order.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex.index()]
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Everything [`build_graph`] produces: the graph plus the name tables and
/// the edge-id → label map the translator and the persistence codec need.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphParts {
    pub graph:      TransitGraph,
    /// Reachable stop names; index `i` owns vertices `2i` / `2i+1`.
    pub stop_names: Vec<String>,
    pub bus_names:  Vec<String>,
    /// Indexed by `EdgeId`.
    pub labels:     Vec<EdgeLabel>,
}

/// Translate a catalogue view into the routing graph.
///
/// Pure: reads the view, mutates nothing, returns all outputs.  Fails fast
/// on a non-positive velocity or a distance gap between two consecutive
/// stops on some line.
pub fn build_graph<V: CatalogueView + ?Sized>(
    view: &V,
    config: &RoutingConfig,
) -> EngineResult<GraphParts> {
    if !(config.bus_velocity_kmh.is_finite() && config.bus_velocity_kmh > 0.0) {
        return Err(EngineError::Config(format!(
            "bus velocity must be positive, got {}",
            config.bus_velocity_kmh
        )));
    }

    let stop_names: Vec<String> = view
        .reachable_stop_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let stop_count = stop_names.len();

    // Reachable index by name; vertex numbering follows this table.
    let stop_idx: FxHashMap<&str, StopId> = stop_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), StopId(i as u32)))
        .collect();

    let mut graph = TransitGraph::with_vertices(2 * stop_count);
    let mut labels: Vec<EdgeLabel> = Vec::new();

    // ── Wait edges: one per reachable stop, in stop order ─────────────────
    let wait_min = config.wait_minutes();
    for i in 0..stop_count {
        let stop = StopId(i as u32);
        graph.add_edge(wait_vertex(stop), board_vertex(stop), wait_min);
        labels.push(EdgeLabel::Wait { stop });
    }

    // ── Ride edges: by bus, then start position, then end position ────────
    let bus_names: Vec<String> = view.bus_names().into_iter().map(str::to_string).collect();
    for (bus_no, bus_name) in bus_names.iter().enumerate() {
        let bus = BusId(bus_no as u32);
        let seq = view.stops_for_bus(bus_name);
        for i in 0..seq.len() {
            let mut minutes = 0.0;
            let mut span_count = 0u32;
            for j in (i + 1)..seq.len() {
                let hop_m = view.distance_m(seq[j - 1], seq[j]).ok_or_else(|| {
                    EngineError::MissingDistance {
                        bus:  bus_name.clone(),
                        from: view.stop_name(seq[j - 1]).to_string(),
                        to:   view.stop_name(seq[j]).to_string(),
                    }
                })?;
                minutes += ride_minutes(hop_m, config.bus_velocity_kmh);
                span_count += 1;

                let from = board_vertex(stop_idx[view.stop_name(seq[i])]);
                let to = wait_vertex(stop_idx[view.stop_name(seq[j])]);
                graph.add_edge(from, to, minutes);
                labels.push(EdgeLabel::Ride { bus, span_count, minutes });
            }
        }
    }

    debug_assert_eq!(labels.len(), graph.edge_count());

    Ok(GraphParts { graph, stop_names, bus_names, labels })
}
