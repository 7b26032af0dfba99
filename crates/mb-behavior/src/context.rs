//! Read-only turn inputs passed to every strategy call.

use mb_core::Turn;
use mb_spatial::RoadGraph;

/// What a [`Robot`][crate::Robot] may look at besides the world state.
///
/// Built by the driver once per turn.  The graph is borrowed for the whole
/// run; nothing here is mutable.
#[derive(Clone, Copy)]
pub struct RobotContext<'a> {
    /// The turn being decided (the first turn is `Turn::ZERO`).
    pub turn: Turn,

    /// The road network.
    pub graph: &'a RoadGraph,
}

impl<'a> RobotContext<'a> {
    #[inline]
    pub fn new(turn: Turn, graph: &'a RoadGraph) -> Self {
        Self { turn, graph }
    }
}
