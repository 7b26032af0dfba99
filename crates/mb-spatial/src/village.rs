//! The bundled village: eleven places joined by fourteen roads.

use crate::{Layout, RoadGraph, SpatialResult};

/// Where the robot starts and where fresh parcels are handed over.
pub const HUB: &str = "Post Office";

pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

/// Drawing-surface coordinates of every place.
pub const LOCATIONS: [(&str, f32, f32); 11] = [
    ("Alice's House",  50.0, 100.0),
    ("Bob's House",   200.0,  50.0),
    ("Cabin",          50.0, 300.0),
    ("Post Office",   200.0, 200.0),
    ("Town Hall",     350.0, 100.0),
    ("Daria's House", 500.0, 100.0),
    ("Ernie's House", 650.0, 250.0),
    ("Grete's House", 550.0, 400.0),
    ("Farm",          350.0, 450.0),
    ("Shop",          350.0, 300.0),
    ("Marketplace",   200.0, 350.0),
];

/// Closed tour from the hub that passes every place at least once.  Each
/// stop is a road away from the previous one; the last stop is the hub.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House",
    "Grete's House", "Shop", "Grete's House", "Farm",
    "Marketplace", "Post Office",
];

/// The village road graph.
pub fn graph() -> SpatialResult<RoadGraph> {
    RoadGraph::from_edges(&ROADS)
}

/// The village layout for `graph` (built by [`graph`]).
pub fn layout(graph: &RoadGraph) -> SpatialResult<Layout> {
    Layout::from_named(graph, &LOCATIONS)
}
