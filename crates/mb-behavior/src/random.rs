//! Uniform random walk.

use mb_core::SimRng;
use mb_world::VillageState;

use crate::{BehaviorError, BehaviorResult, Move, Robot, RobotContext, RouteMemory};

/// Walks to a uniformly random neighbor every turn.
///
/// Ignores parcels and carries no memory.  Delivers eventually on a
/// connected graph, but slowly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRobot;

impl Robot for RandomRobot {
    fn next_move(
        &self,
        state:   &VillageState,
        _memory: RouteMemory,
        ctx:     &RobotContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Move> {
        let direction = *rng
            .choose(ctx.graph.neighbors(state.place))
            .ok_or(BehaviorError::DeadEnd(state.place))?;
        Ok(Move { direction, memory: RouteMemory::new() })
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
