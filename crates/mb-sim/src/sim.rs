//! The `Sim` struct and its turn loop.

use mb_behavior::{Move, Robot, RobotContext, RouteMemory};
use mb_core::{NodeId, SimConfig, SimRng, Turn};
use mb_spatial::RoadGraph;
use mb_world::VillageState;
use tracing::{debug, info, warn};

use crate::{HaltHandle, RunOutcome, SimError, SimObserver, SimResult, TurnEvent, TurnReport};

/// The main simulation runner.
///
/// `Sim<B>` owns the graph, the strategy, the current world snapshot, and
/// the strategy's memory.  Each turn:
///
/// 1. **Decide**: call [`Robot::next_move`] with the current state and the
///    memory returned last turn.
/// 2. **Apply**: replace the state with `state.move_to(direction)`.
/// 3. **Report**: classify the turn as a [`TurnEvent`] and hand a
///    [`TurnReport`] back to the caller.
///
/// The strategy is never called once the state is complete; [`step`] fails
/// with [`SimError::AlreadyComplete`] instead.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// [`step`]: Sim::step
pub struct Sim<B: Robot> {
    /// Global configuration (seed, parcel count, start place, turn cap).
    pub config: SimConfig,

    pub(crate) graph:  RoadGraph,
    pub(crate) robot:  B,
    /// Where `reset` puts the robot: the resolved `config.start_place`, or
    /// the initial state's place when the graph has no such place.
    pub(crate) start:  NodeId,
    pub(crate) state:  VillageState,
    pub(crate) memory: RouteMemory,
    pub(crate) turn:   Turn,
    pub(crate) rng:    SimRng,
    pub(crate) halt:   HaltHandle,
}

impl<B: Robot> Sim<B> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The current world snapshot.
    pub fn state(&self) -> &VillageState {
        &self.state
    }

    /// Turns taken since the last (re)start.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The strategy's plan carried into the next turn.
    pub fn memory(&self) -> &RouteMemory {
        &self.memory
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn robot(&self) -> &B {
        &self.robot
    }

    /// `true` once every parcel has been delivered.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// A handle that stops [`run`](Self::run) before its next turn.
    pub fn halt_handle(&self) -> HaltHandle {
        self.halt.clone()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Play exactly one turn.
    ///
    /// Errors if the world is already complete or the strategy fails; in both
    /// cases the state is left as it was.
    pub fn step(&mut self) -> SimResult<TurnReport> {
        if self.state.is_complete() {
            return Err(SimError::AlreadyComplete { turns: self.turn.0 });
        }

        let ctx = RobotContext::new(self.turn, &self.graph);
        let Move { direction, memory } =
            self.robot
                .next_move(&self.state, self.memory.clone(), &ctx, &mut self.rng)?;

        let next  = self.state.move_to(&self.graph, direction);
        let event = TurnEvent::between(&self.graph, &self.state, &next, direction);

        self.state  = next;
        self.memory = memory;
        self.turn   = self.turn.next();

        debug!(
            turn      = self.turn.0,
            robot     = self.robot.name(),
            place     = self.graph.name(self.state.place),
            pending   = self.state.parcel_count(),
            planned   = self.memory.len(),
            ?event,
            "turn played"
        );

        Ok(TurnReport { turn: self.turn, state: self.state.clone(), event })
    }

    /// Run until every parcel is delivered, the halt handle fires, or
    /// `config.max_turns` is reached.
    ///
    /// Calls observer hooks after every turn.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        let outcome = loop {
            let turns = self.turn.0;
            if self.state.is_complete() {
                observer.on_complete(self.turn);
                break RunOutcome::Completed { turns };
            }
            if self.halt.is_halted() {
                break RunOutcome::Halted { turns };
            }
            if self.config.turn_limit_reached(turns) {
                break RunOutcome::TurnLimit { turns };
            }

            let report = self.step()?;
            observer.on_turn(&report);
        };

        match outcome {
            RunOutcome::Completed { turns } => {
                info!(turns, robot = self.robot.name(), "all parcels delivered");
            }
            RunOutcome::Halted { turns } => {
                info!(turns, pending = self.state.parcel_count(), "simulation halted");
            }
            RunOutcome::TurnLimit { turns } => {
                warn!(turns, pending = self.state.parcel_count(), "turn limit reached");
            }
        }
        observer.on_sim_end(&outcome);
        Ok(outcome)
    }

    /// Play up to `n` turns, stopping early once the world is complete.
    ///
    /// Ignores the halt flag and the turn cap; returns the number of turns
    /// actually played.  Useful for tests and incremental stepping.
    pub fn run_turns<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut played = 0;
        while played < n && !self.state.is_complete() {
            let report = self.step()?;
            observer.on_turn(&report);
            played += 1;
        }
        if self.state.is_complete() && played > 0 {
            observer.on_complete(self.turn);
        }
        Ok(played)
    }

    /// Start over: a fresh random world at the start place, turn zero, empty
    /// memory, and a cleared halt flag.
    ///
    /// The RNG stream continues, so consecutive resets give different worlds.
    pub fn reset(&mut self) -> SimResult<()> {
        self.state = VillageState::random(
            &self.graph,
            self.start,
            self.config.parcel_count,
            &mut self.rng,
        )?;
        self.memory = RouteMemory::new();
        self.turn   = Turn::ZERO;
        self.halt.resume();
        info!(parcels = self.state.parcel_count(), "simulation reset");
        Ok(())
    }
}
