//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Strategies call routing through the [`Router`] trait so another search
//! can be dropped in without touching them.  The default [`BfsRouter`] is
//! all the village needs: every road counts as one hop, and BFS returns a
//! shortest path in hops.
//!
//! # Route shape
//!
//! A [`Route`] lists the places to step onto, in order.  The origin is not
//! included; the destination is the last stop.  `from == to` yields an
//! empty route, which is distinct from [`SpatialError::NoRoute`].

use std::collections::VecDeque;

use mb_core::NodeId;

use crate::network::RoadGraph;
use crate::SpatialError;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Places to visit in order, excluding the origin.
    pub stops: Vec<NodeId>,
}

impl Route {
    /// Hop count.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.stops.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so a renderer thread can hold the
/// same strategy the turn loop uses.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// Returns [`SpatialError::NoRoute`] if `to` is unreachable and
    /// [`SpatialError::NodeNotFound`] for ids foreign to `graph`.
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, SpatialError>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the road graph, every road costing one hop.
///
/// The frontier is processed in FIFO order and neighbors are expanded in
/// road insertion order, so among equally short paths the one through the
/// earliest-listed roads wins.  A place already visited or queued is never
/// queued again, which bounds the search by the node count even on cyclic
/// or disconnected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, SpatialError> {
        bfs(graph, from, to)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, SpatialError> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(SpatialError::NodeNotFound(node));
        }
    }
    if from == to {
        return Ok(Route::default());
    }

    let n = graph.node_count();
    // seen[v] = v has been visited or is waiting in the frontier.
    let mut seen = vec![false; n];
    // prev[v] = node we stepped from to first reach v.
    let mut prev = vec![NodeId::INVALID; n];
    let mut frontier = VecDeque::new();

    seen[from.index()] = true;
    frontier.push_back(from);

    while let Some(at) = frontier.pop_front() {
        for &next in graph.neighbors(at) {
            if next == to {
                prev[to.index()] = at;
                return Ok(reconstruct(&prev, from, to));
            }
            if !seen[next.index()] {
                seen[next.index()] = true;
                prev[next.index()] = at;
                frontier.push_back(next);
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(prev: &[NodeId], from: NodeId, to: NodeId) -> Route {
    let mut stops = Vec::new();
    let mut cur = to;
    while cur != from {
        stops.push(cur);
        cur = prev[cur.index()];
    }
    stops.reverse();
    Route { stops }
}
