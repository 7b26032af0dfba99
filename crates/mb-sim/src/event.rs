//! What happened on a turn, and how a run ended.

use mb_core::{NodeId, Turn};
use mb_spatial::RoadGraph;
use mb_world::VillageState;

/// Human-level classification of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The robot walked to `to`; nothing was delivered.
    Moved { to: NodeId },

    /// The robot walked to `at` and `count` parcels were delivered there.
    Delivered { at: NodeId, count: usize },

    /// The strategy asked for a place that is not a road away; the world is
    /// unchanged.
    Blocked { toward: NodeId },
}

impl TurnEvent {
    /// Classify the step from `before` to `after` given the requested
    /// `direction`.
    ///
    /// `Blocked` only when no road leads from `before.place` to `direction`.
    /// A walk along a self-loop road leaves the state unchanged and is
    /// reported as `Moved`.
    pub fn between(
        graph:     &RoadGraph,
        before:    &VillageState,
        after:     &VillageState,
        direction: NodeId,
    ) -> Self {
        if !graph.is_neighbor(before.place, direction) {
            return TurnEvent::Blocked { toward: direction };
        }
        let delivered = before.parcel_count().saturating_sub(after.parcel_count());
        if delivered > 0 {
            TurnEvent::Delivered { at: after.place, count: delivered }
        } else {
            TurnEvent::Moved { to: after.place }
        }
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, TurnEvent::Delivered { .. })
    }
}

/// Everything a presentation layer needs after one turn.
///
/// `state` is a complete snapshot owned by the report; keeping it around
/// never aliases the simulation's live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Turns taken so far, this one included.
    pub turn: Turn,

    pub state: VillageState,

    pub event: TurnEvent,
}

/// Why [`Sim::run`][crate::Sim::run] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every parcel was delivered after `turns` turns.
    Completed { turns: u64 },

    /// A [`HaltHandle`][crate::HaltHandle] stopped the loop.
    Halted { turns: u64 },

    /// `SimConfig::max_turns` was reached with parcels still pending.
    TurnLimit { turns: u64 },
}

impl RunOutcome {
    pub fn turns(&self) -> u64 {
        match *self {
            RunOutcome::Completed { turns }
            | RunOutcome::Halted { turns }
            | RunOutcome::TurnLimit { turns } => turns,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}
