//! Fixed closed tour.

use mb_core::{NodeId, SimRng};
use mb_spatial::{village, RoadGraph};
use mb_world::VillageState;

use crate::{BehaviorError, BehaviorResult, Move, Robot, RobotContext, RouteMemory};

/// Follows a hard-coded tour over and over, ignoring where parcels are.
///
/// When the memory runs dry it is refilled with the whole tour.  With a tour
/// that visits every place and returns to its start, every parcel is
/// delivered within two laps.
#[derive(Debug, Clone)]
pub struct RouteRobot {
    tour: Vec<NodeId>,
}

impl RouteRobot {
    /// Fails with [`BehaviorError::Config`] for an empty tour.
    pub fn new(tour: Vec<NodeId>) -> BehaviorResult<Self> {
        if tour.is_empty() {
            return Err(BehaviorError::Config("route robot needs a non-empty tour".into()));
        }
        Ok(Self { tour })
    }

    /// Resolve a tour given as place labels.
    pub fn from_names<S: AsRef<str>>(graph: &RoadGraph, names: &[S]) -> BehaviorResult<Self> {
        Self::new(graph.nodes(names)?)
    }

    /// The village mail route ([`village::MAIL_ROUTE`]).
    pub fn mail_route(graph: &RoadGraph) -> BehaviorResult<Self> {
        Self::from_names(graph, &village::MAIL_ROUTE)
    }

    pub fn tour(&self) -> &[NodeId] {
        &self.tour
    }
}

impl Robot for RouteRobot {
    fn next_move(
        &self,
        _state: &VillageState,
        memory: RouteMemory,
        _ctx:   &RobotContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Move> {
        let memory = if memory.is_empty() {
            RouteMemory::from(self.tour.clone())
        } else {
            memory
        };
        let (direction, memory) = memory
            .split_first()
            .ok_or_else(|| BehaviorError::Config("route robot tour is empty".into()))?;
        Ok(Move { direction, memory })
    }

    fn name(&self) -> &'static str {
        "route"
    }
}
