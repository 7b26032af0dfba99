//! 2-D place positions.
//!
//! The simulation never looks at coordinates.  They exist for whoever draws
//! the village: road segments run between the positions of their endpoints
//! and the robot is drawn at the position of `state.place`.

use mb_core::NodeId;

use crate::{RoadGraph, SpatialResult};

/// A position on the drawing surface, in surface units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    /// Animations use this to slide the robot along a road between turns.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position of each place, indexed by `NodeId`.
///
/// Places without a configured position map to `None`.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    points: Vec<Option<Point>>,
}

impl Layout {
    /// Build a layout for `graph` from `(label, x, y)` triples.
    ///
    /// Fails with [`SpatialError::UnknownPlace`][crate::SpatialError::UnknownPlace]
    /// if a label is not a place in `graph`.
    pub fn from_named(graph: &RoadGraph, entries: &[(&str, f32, f32)]) -> SpatialResult<Self> {
        let mut points = vec![None; graph.node_count()];
        for &(name, x, y) in entries {
            let id = graph.node(name)?;
            points[id.index()] = Some(Point::new(x, y));
        }
        Ok(Self { points })
    }

    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.points.get(node.index()).copied().flatten()
    }

    /// `true` if every place of the graph this layout was built for has a
    /// position.
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(Option::is_some)
    }
}
