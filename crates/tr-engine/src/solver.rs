//! All-pairs shortest-path solver.
//!
//! # Algorithm
//!
//! Iterative relaxation through intermediate vertices (Floyd–Warshall):
//! seed the table from direct edges, then for each candidate intermediate
//! `k` in ascending vertex order, replace `(u, v)` whenever routing through
//! `k` is **strictly** shorter.  Ties keep the first-discovered path; the
//! fixed relaxation order makes results deterministic.
//!
//! `O(V³)` time and `O(V²)` memory, with `V` = twice the reachable-stop
//! count.  That is the deliberate trade of this design — a one-time eager
//! precomputation buys O(1) lookups per query and a table that persists as
//! a flat array with no re-solving on load.  The quadratic table is the
//! scaling limit: ~5,000 reachable stops ≈ 100 M entries.
//!
//! # Numeric semantics
//!
//! Weights are non-negative floating-point minutes.  Unreachable pairs hold
//! `None` — never an infinite sentinel that could participate in further
//! relaxation.

use tr_core::{EdgeId, VertexId};

use crate::graph::TransitGraph;

// ── Routing table ─────────────────────────────────────────────────────────────

/// Best known travel for one ordered vertex pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEntry {
    /// Total travel time in minutes.
    pub weight_min: f64,
    /// Id of the **last** edge on the best path; `None` only on the
    /// diagonal `(v, v)`.  Route reconstruction walks this backwards.
    pub prev_edge: Option<EdgeId>,
}

/// The precomputed `(source, destination) → RouteEntry` matrix.
///
/// Row-major flat storage: entry `(u, v)` lives at `u * vertex_count + v`.
/// Immutable once [`solve`] returns.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingTable {
    vertex_count: usize,
    entries:      Vec<Option<RouteEntry>>,
}

impl RoutingTable {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The best known travel from `from` to `to`, or `None` if unreachable.
    #[inline]
    pub fn entry(&self, from: VertexId, to: VertexId) -> Option<&RouteEntry> {
        self.entries[from.index() * self.vertex_count + to.index()].as_ref()
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Precompute the routing table for `graph`.  Run once at build time.
pub fn solve(graph: &TransitGraph) -> RoutingTable {
    let v = graph.vertex_count();
    let mut entries: Vec<Option<RouteEntry>> = vec![None; v * v];

    // ── Seed: zero-cost diagonal, then direct edges ───────────────────────
    for u in 0..v {
        entries[u * v + u] = Some(RouteEntry { weight_min: 0.0, prev_edge: None });
    }
    for (id, edge) in graph.edges().iter().enumerate() {
        let slot = &mut entries[edge.from.index() * v + edge.to.index()];
        // Parallel edges: strictly-less keeps the cheaper, first wins ties.
        let better = match slot {
            Some(existing) => edge.weight_min < existing.weight_min,
            None => true,
        };
        if better {
            *slot = Some(RouteEntry {
                weight_min: edge.weight_min,
                prev_edge:  Some(EdgeId(id as u32)),
            });
        }
    }

    // ── Relax through each intermediate vertex ────────────────────────────
    for k in 0..v {
        for u in 0..v {
            let Some(through_uk) = entries[u * v + k] else {
                continue;
            };
            for w in 0..v {
                let Some(through_kw) = entries[k * v + w] else {
                    continue;
                };
                let candidate = through_uk.weight_min + through_kw.weight_min;
                let slot = &mut entries[u * v + w];
                let better = match slot {
                    Some(existing) => candidate < existing.weight_min,
                    None => true,
                };
                if better {
                    // (k, w)'s last edge is the combined path's last edge;
                    // it is None only when k == w, where (u, k)'s applies.
                    *slot = Some(RouteEntry {
                        weight_min: candidate,
                        prev_edge:  through_kw.prev_edge.or(through_uk.prev_edge),
                    });
                }
            }
        }
    }

    RoutingTable { vertex_count: v, entries }
}
