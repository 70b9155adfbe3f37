//! The solved routing engine and point-to-point queries.
//!
//! A [`TransitRouter`] is either built from a catalogue view (graph build +
//! eager all-pairs solve, both inside [`TransitRouter::build`]) or
//! reassembled from persisted [`EngineParts`] with zero re-solving.  Either
//! way it is immutable and self-contained afterwards: queries touch only
//! the engine's own tables, never the catalogue.

use log::{debug, info};
use rustc_hash::FxHashMap;

use tr_core::{CatalogueView, EdgeId, RoutingConfig, StopId};

use crate::graph::{build_graph, wait_vertex, EdgeLabel, GraphParts, TransitGraph};
use crate::itinerary::{Itinerary, Step};
use crate::solver::{solve, RoutingTable};
use crate::EngineResult;

// ── EngineParts ───────────────────────────────────────────────────────────────

/// The complete serializable state of a solved engine.
///
/// This is the persistence codec's contract with the engine: every field is
/// stored, nothing is recomputed on load except the derived name index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineParts {
    pub config:     RoutingConfig,
    pub graph:      TransitGraph,
    /// Reachable stop names; index `i` owns vertices `2i` / `2i+1`.
    pub stop_names: Vec<String>,
    pub bus_names:  Vec<String>,
    /// Edge-id → meaning, indexed by `EdgeId`.
    pub labels:     Vec<EdgeLabel>,
    pub table:      RoutingTable,
}

// ── TransitRouter ─────────────────────────────────────────────────────────────

/// A built-and-solved routing engine.
pub struct TransitRouter {
    parts: EngineParts,
    /// Derived: stop name → reachable index.  Rebuilt on load, not stored.
    stop_index: FxHashMap<String, StopId>,
}

impl TransitRouter {
    /// Build the graph from `view`, solve all pairs, and return a
    /// query-ready engine.
    ///
    /// The catalogue must not be mutated afterwards; the engine holds no
    /// reference to it and will not observe changes.
    pub fn build<V: CatalogueView + ?Sized>(
        view: &V,
        config: RoutingConfig,
    ) -> EngineResult<Self> {
        let GraphParts { graph, stop_names, bus_names, labels } = build_graph(view, &config)?;
        info!(
            "transit graph built: {} stops, {} vertices, {} edges",
            stop_names.len(),
            graph.vertex_count(),
            graph.edge_count()
        );

        let table = solve(&graph);
        info!("routing table solved for {} vertices", table.vertex_count());

        Ok(Self::from_parts(EngineParts {
            config,
            graph,
            stop_names,
            bus_names,
            labels,
            table,
        }))
    }

    /// Reassemble an engine from persisted parts, rebuilding the derived
    /// name index.  No solving happens here.
    pub fn from_parts(parts: EngineParts) -> Self {
        let stop_index = parts
            .stop_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), StopId(i as u32)))
            .collect();
        Self { parts, stop_index }
    }

    /// Clone out the serializable state (used by the persistence codec).
    pub fn to_parts(&self) -> EngineParts {
        self.parts.clone()
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.parts.config
    }

    /// `true` if `stop` is served by at least one bus (has graph vertices).
    pub fn is_served(&self, stop: &str) -> bool {
        self.stop_index.contains_key(stop)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The fastest itinerary from `from` to `to`, or `None` when no route
    /// exists (unknown/unserved endpoint, or unreachable pair).
    ///
    /// `from == to` is trivially an empty itinerary with zero total time —
    /// answered before any vertex lookup, so it holds even for names the
    /// network has never seen.
    pub fn route(&self, from: &str, to: &str) -> Option<Itinerary> {
        if from == to {
            return Some(Itinerary::empty());
        }
        let &from_stop = self.stop_index.get(from)?;
        let &to_stop = self.stop_index.get(to)?;

        let src = wait_vertex(from_stop);
        let dst = wait_vertex(to_stop);
        let total_min = self.parts.table.entry(src, dst)?.weight_min;

        // Walk predecessor edges back from the destination, then reverse.
        let mut edge_ids: Vec<EdgeId> = Vec::new();
        let mut cursor = dst;
        while cursor != src {
            let entry = self.parts.table.entry(src, cursor)?;
            let edge = entry.prev_edge?;
            edge_ids.push(edge);
            cursor = self.parts.graph.edge(edge).from;
        }
        edge_ids.reverse();

        debug!("route {from:?} -> {to:?}: {} edges, {total_min} min", edge_ids.len());

        let steps = edge_ids.into_iter().map(|e| self.translate(e)).collect();
        Some(Itinerary { total_min, steps })
    }

    /// Turn one traversed edge into a domain itinerary step.
    fn translate(&self, edge: EdgeId) -> Step {
        match self.parts.labels[edge.index()] {
            EdgeLabel::Wait { stop } => Step::Wait {
                stop:    self.parts.stop_names[stop.index()].clone(),
                minutes: self.parts.config.wait_minutes(),
            },
            EdgeLabel::Ride { bus, span_count, minutes } => Step::Ride {
                bus: self.parts.bus_names[bus.index()].clone(),
                span_count,
                minutes,
            },
        }
    }
}
