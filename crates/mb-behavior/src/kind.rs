//! Strategy selection by name.

use std::fmt;
use std::str::FromStr;

use mb_core::SimRng;
use mb_spatial::{BfsRouter, RoadGraph};
use mb_world::VillageState;

use crate::{
    BehaviorError, BehaviorResult, GoalRobot, Move, RandomRobot, Robot, RobotContext,
    RouteMemory, RouteRobot,
};

/// The three bundled strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RobotKind {
    Random,
    Route,
    #[default]
    Goal,
}

impl RobotKind {
    pub const ALL: [RobotKind; 3] = [RobotKind::Random, RobotKind::Route, RobotKind::Goal];

    pub fn as_str(self) -> &'static str {
        match self {
            RobotKind::Random => "random",
            RobotKind::Route  => "route",
            RobotKind::Goal   => "goal",
        }
    }

    /// Instantiate the strategy for `graph`.  The route robot uses the
    /// village mail route, so it fails on graphs that lack those places.
    pub fn build(self, graph: &RoadGraph) -> BehaviorResult<AnyRobot> {
        Ok(match self {
            RobotKind::Random => AnyRobot::Random(RandomRobot),
            RobotKind::Route  => AnyRobot::Route(RouteRobot::mail_route(graph)?),
            RobotKind::Goal   => AnyRobot::Goal(GoalRobot::default()),
        })
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RobotKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| BehaviorError::UnknownRobot(s.to_string()))
    }
}

/// Any of the bundled strategies, dispatched with an exhaustive `match`.
#[derive(Debug, Clone)]
pub enum AnyRobot {
    Random(RandomRobot),
    Route(RouteRobot),
    Goal(GoalRobot<BfsRouter>),
}

impl AnyRobot {
    pub fn kind(&self) -> RobotKind {
        match self {
            AnyRobot::Random(_) => RobotKind::Random,
            AnyRobot::Route(_)  => RobotKind::Route,
            AnyRobot::Goal(_)   => RobotKind::Goal,
        }
    }
}

impl Robot for AnyRobot {
    fn next_move(
        &self,
        state:  &VillageState,
        memory: RouteMemory,
        ctx:    &RobotContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Move> {
        match self {
            AnyRobot::Random(r) => r.next_move(state, memory, ctx, rng),
            AnyRobot::Route(r)  => r.next_move(state, memory, ctx, rng),
            AnyRobot::Goal(r)   => r.next_move(state, memory, ctx, rng),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
