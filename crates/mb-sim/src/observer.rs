//! Simulation observer trait for presentation and progress reporting.

use mb_core::Turn;
use mb_spatial::RoadGraph;
use tracing::info;

use crate::{RunOutcome, TurnEvent, TurnReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_turn(&mut self, report: &TurnReport) {
///         if let TurnEvent::Delivered { count, .. } = report.event {
///             self.0 += count;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every turn with the new snapshot.
    fn on_turn(&mut self, _report: &TurnReport) {}

    /// Called once when the last parcel has been delivered.
    fn on_complete(&mut self, _turns: Turn) {}

    /// Called once when `run` returns, whatever the reason.
    fn on_sim_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Writes one human-readable `info` line per turn through `tracing`.
pub struct TracingObserver<'g> {
    graph: &'g RoadGraph,
}

impl<'g> TracingObserver<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }

    /// The log line for one turn.
    pub fn describe(&self, report: &TurnReport) -> String {
        let turn = report.turn.0;
        match report.event {
            TurnEvent::Moved { to } => {
                format!("step {turn}: moving to {}", self.graph.name(to))
            }
            TurnEvent::Delivered { at, count: 1 } => {
                format!("step {turn}: delivery made at {}", self.graph.name(at))
            }
            TurnEvent::Delivered { at, count } => {
                format!("step {turn}: {count} deliveries made at {}", self.graph.name(at))
            }
            TurnEvent::Blocked { toward } => {
                format!("step {turn}: no road to {}, staying put", self.graph.name(toward))
            }
        }
    }
}

impl SimObserver for TracingObserver<'_> {
    fn on_turn(&mut self, report: &TurnReport) {
        info!(
            turn    = report.turn.0,
            place   = self.graph.name(report.state.place),
            pending = report.state.parcel_count(),
            "{}",
            self.describe(report)
        );
    }

    fn on_complete(&mut self, turns: Turn) {
        info!(turns = turns.0, "all deliveries completed in {} steps", turns.0);
    }
}
