//! Fluent builder for constructing a [`Sim`].

use mb_behavior::{Robot, RouteMemory};
use mb_core::{SimConfig, SimRng, Turn};
use mb_spatial::RoadGraph;
use mb_world::VillageState;

use crate::{HaltHandle, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, parcel count, start place, turn cap
/// - [`RoadGraph`]: the village
/// - `B: Robot`: the strategy (e.g. [`mb_behavior::RobotKind::build`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                     |
/// |------------------------|---------------------------------------------|
/// | `.initial_state(s)`    | `VillageState::random` at `start_place`     |
/// | `.halt_handle(h)`      | A fresh, un-halted handle                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph, GoalRobot::default())
///     .initial_state(state)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: Robot> {
    config: SimConfig,
    graph:  RoadGraph,
    robot:  B,
    state:  Option<VillageState>,
    halt:   Option<HaltHandle>,
}

impl<B: Robot> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: RoadGraph, robot: B) -> Self {
        Self { config, graph, robot, state: None, halt: None }
    }

    /// Start from a hand-built state instead of a random one.
    ///
    /// The robot's place and every parcel's place and address must belong to
    /// the graph.  `config.start_place` is then optional: when the graph has
    /// no such place, `reset` restarts from this state's place instead.
    pub fn initial_state(mut self, state: VillageState) -> Self {
        self.state = Some(state);
        self
    }

    /// Share an existing halt flag with the simulation.
    pub fn halt_handle(mut self, halt: HaltHandle) -> Self {
        self.halt = Some(halt);
        self
    }

    /// Validate inputs, generate the initial world if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.config.seed);

        let (state, start) = match self.state {
            Some(s) => {
                check_state(&self.graph, &s)?;
                let start = self.graph.node(&self.config.start_place).unwrap_or(s.place);
                (s, start)
            }
            None => {
                let start = self.graph.node(&self.config.start_place)?;
                let s = VillageState::random(&self.graph, start, self.config.parcel_count, &mut rng)?;
                (s, start)
            }
        };

        Ok(Sim {
            config: self.config,
            graph:  self.graph,
            robot:  self.robot,
            start,
            state,
            memory: RouteMemory::new(),
            turn:   Turn::ZERO,
            rng,
            halt:   self.halt.unwrap_or_default(),
        })
    }
}

/// Every id in a hand-built state must come from `graph`.
fn check_state(graph: &RoadGraph, state: &VillageState) -> SimResult<()> {
    if !graph.contains(state.place) {
        return Err(SimError::Config(format!(
            "initial place {} is not in the graph",
            state.place
        )));
    }
    for (i, p) in state.parcels.iter().enumerate() {
        if let Some(id) = [p.place, p.address].into_iter().find(|&id| !graph.contains(id)) {
            return Err(SimError::Config(format!("parcel {i} refers to {id}, which is not in the graph")));
        }
    }
    Ok(())
}
