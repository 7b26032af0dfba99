//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Place labels are interned on first sight: the `n`-th distinct label gets
//! `NodeId(n)`.  Adjacency is then a plain `Vec<Vec<NodeId>>` indexed by
//! `NodeId`, so a neighbor lookup is one bounds-checked slice access.
//!
//! Every road is undirected.  `add_road(a, b)` appends `b` to `a`'s list and
//! `a` to `b`'s list, in call order.  Duplicate roads are kept as given; the
//! graph never deduplicates.
//!
//! The graph is immutable once built.  Every other crate only ever borrows
//! it.

use rustc_hash::FxHashMap;

use mb_core::NodeId;

use crate::{SpatialError, SpatialResult};

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected road graph over named places.
///
/// Do not construct directly; use [`RoadGraph::from_edges`] or
/// [`RoadGraphBuilder`].
#[derive(Debug, Clone)]
pub struct RoadGraph {
    /// Place label of each node.  Indexed by `NodeId`.
    names: Vec<String>,

    /// Reverse of `names`.
    index: FxHashMap<String, NodeId>,

    /// Neighbors of each node in road insertion order.  Indexed by `NodeId`.
    adjacency: Vec<Vec<NodeId>>,
}

impl RoadGraph {
    /// Build a graph from `"A-B"` road descriptors.
    ///
    /// Fails with [`SpatialError::MalformedEdge`] on the first descriptor
    /// that does not split on `-` into exactly two non-empty labels.  Nothing
    /// is skipped: a bad road list is a setup error.
    pub fn from_edges<S: AsRef<str>>(edges: &[S]) -> SpatialResult<RoadGraph> {
        let mut b = RoadGraphBuilder::new();
        for edge in edges {
            b.add_edge(edge.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected roads (each road is stored twice internally).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `true` if `node` was produced by this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.names.len()
    }

    // ── Names ─────────────────────────────────────────────────────────────

    /// Resolve a place label to its `NodeId`.
    pub fn node(&self, name: &str) -> SpatialResult<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SpatialError::UnknownPlace(name.to_string()))
    }

    /// Resolve a list of labels, failing on the first unknown one.
    pub fn nodes<S: AsRef<str>>(&self, names: &[S]) -> SpatialResult<Vec<NodeId>> {
        names.iter().map(|n| self.node(n.as_ref())).collect()
    }

    /// Label of `node`, or `"?"` for ids from another graph.
    pub fn name(&self, node: NodeId) -> &str {
        self.names.get(node.index()).map_or("?", String::as_str)
    }

    /// All node ids in interning order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(|i| NodeId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `node` in road insertion order.
    ///
    /// Returns an empty slice for ids not produced by this graph; use
    /// [`try_neighbors`](Self::try_neighbors) to tell the two apart.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node.index()).map_or(&[][..], Vec::as_slice)
    }

    /// Like [`neighbors`](Self::neighbors) but fails with
    /// [`SpatialError::NodeNotFound`] for foreign ids.
    pub fn try_neighbors(&self, node: NodeId) -> SpatialResult<&[NodeId]> {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .ok_or(SpatialError::NodeNotFound(node))
    }

    /// `true` if a road connects `from` and `to`.
    #[inline]
    pub fn is_neighbor(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Every directed `(from, to)` pair, grouped by `from`.  Renderers draw
    /// roads from this.
    pub fn roads(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, ns)| ns.iter().map(move |&n| (NodeId(i as u32), n)))
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mb_spatial::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_edge("Farm-Shop").unwrap();
/// let (shop, hall) = b.add_road("Shop", "Town Hall");
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.is_neighbor(hall, shop));
/// ```
#[derive(Default)]
pub struct RoadGraphBuilder {
    names:     Vec<String>,
    index:     FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning its existing id if it was seen before.
    pub fn add_place(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected road between two labels, interning both.
    pub fn add_road(&mut self, a: &str, b: &str) -> (NodeId, NodeId) {
        let a = self.add_place(a);
        let b = self.add_place(b);
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        (a, b)
    }

    /// Parse and add one `"A-B"` descriptor.
    pub fn add_edge(&mut self, descriptor: &str) -> SpatialResult<(NodeId, NodeId)> {
        let (a, b) = parse_edge(descriptor)?;
        Ok(self.add_road(a, b))
    }

    pub fn node_count(&self) -> usize { self.names.len() }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        RoadGraph {
            names:     self.names,
            index:     self.index,
            adjacency: self.adjacency,
        }
    }
}

/// Split `"A-B"` into its two endpoints.
fn parse_edge(descriptor: &str) -> SpatialResult<(&str, &str)> {
    let mut parts = descriptor.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(SpatialError::MalformedEdge(descriptor.to_string())),
    }
}
