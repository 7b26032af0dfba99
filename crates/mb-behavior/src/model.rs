//! The `Robot` trait, the strategy extension point.

use mb_core::{NodeId, SimRng};
use mb_world::VillageState;

use crate::{BehaviorResult, RobotContext, RouteMemory};

/// A strategy's decision for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Where to walk.  Expected to be a road away from `state.place`; the
    /// transition ignores anything else.
    pub direction: NodeId,

    /// Memory to hand back on the next turn.
    pub memory: RouteMemory,
}

/// Pluggable delivery strategy.
///
/// `next_move` must not be called once `state` has no parcels left; the
/// driver checks completion before every turn.
///
/// # Example
///
/// ```rust,ignore
/// struct StayHome;
///
/// impl Robot for StayHome {
///     fn next_move(&self, state: &VillageState, memory: RouteMemory,
///                  ctx: &RobotContext<'_>, _rng: &mut SimRng) -> BehaviorResult<Move> {
///         let home = ctx.graph.neighbors(state.place)[0];
///         Ok(Move { direction: home, memory })
///     }
///     fn name(&self) -> &'static str { "stay-home" }
/// }
/// ```
pub trait Robot: Send + Sync + 'static {
    /// Decide this turn's direction from the current state and last turn's
    /// memory.
    fn next_move(
        &self,
        state:  &VillageState,
        memory: RouteMemory,
        ctx:    &RobotContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Move>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}
