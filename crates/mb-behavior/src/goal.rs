//! Goal-directed delivery.

use mb_core::SimRng;
use mb_spatial::{BfsRouter, Router};
use mb_world::VillageState;

use crate::{BehaviorError, BehaviorResult, Move, Robot, RobotContext, RouteMemory};

/// Works through parcels oldest first.
///
/// With no plan in memory it targets `parcels[0]`: the parcel's place if the
/// robot is not standing on it, otherwise the parcel's address.  It routes
/// there with `R` and then follows the route one stop per turn, replanning
/// only once the route is used up.  Other parcels are never considered even
/// when closer.
#[derive(Debug, Clone, Default)]
pub struct GoalRobot<R: Router = BfsRouter> {
    router: R,
}

impl<R: Router> GoalRobot<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: Router + 'static> Robot for GoalRobot<R> {
    fn next_move(
        &self,
        state:  &VillageState,
        memory: RouteMemory,
        ctx:    &RobotContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Move> {
        let memory = if memory.is_empty() {
            let parcel = state.parcels.first().ok_or(BehaviorError::NoParcels)?;
            let target = if parcel.place != state.place {
                parcel.place
            } else {
                parcel.address
            };
            let route = self.router.route(ctx.graph, state.place, target)?;
            RouteMemory::from(route.stops)
        } else {
            memory
        };

        let (direction, memory) = memory
            .split_first()
            .ok_or(BehaviorError::EmptyRoute { at: state.place })?;
        Ok(Move { direction, memory })
    }

    fn name(&self) -> &'static str {
        "goal"
    }
}
