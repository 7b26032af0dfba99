//! Integration tests for mb-sim.

use mb_behavior::{
    AnyRobot, BehaviorError, BehaviorResult, GoalRobot, Move, RandomRobot, Robot, RobotContext,
    RobotKind, RouteMemory,
};
use mb_core::{NodeId, SimConfig, SimRng, Turn};
use mb_spatial::{village, RoadGraph};
use mb_world::{Parcel, VillageState};

use crate::{
    HaltHandle, NoopObserver, RunOutcome, Sim, SimBuilder, SimError, SimObserver,
    TracingObserver, TurnEvent, TurnReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(seed: u64) -> SimConfig {
    SimConfig { seed, ..SimConfig::default() }
}

/// `A - B - C`, starting at A.
fn line() -> RoadGraph {
    RoadGraph::from_edges(&["A-B", "B-C"]).unwrap()
}

fn line_config() -> SimConfig {
    SimConfig { start_place: "A".into(), ..SimConfig::default() }
}

fn village_sim(kind: RobotKind, seed: u64) -> Sim<AnyRobot> {
    let graph = village::graph().unwrap();
    let robot = kind.build(&graph).unwrap();
    SimBuilder::new(test_config(seed), graph, robot).build().unwrap()
}

/// Records every report it sees.
#[derive(Default)]
struct Recorder {
    reports:   Vec<TurnReport>,
    completed: Option<Turn>,
    ended:     Option<RunOutcome>,
}

impl SimObserver for Recorder {
    fn on_turn(&mut self, report: &TurnReport) {
        self.reports.push(report.clone());
    }

    fn on_complete(&mut self, turns: Turn) {
        self.completed = Some(turns);
    }

    fn on_sim_end(&mut self, outcome: &RunOutcome) {
        self.ended = Some(*outcome);
    }
}

/// Always walks towards a fixed place, legal or not.
struct Stubborn(NodeId);

impl Robot for Stubborn {
    fn next_move(
        &self,
        _state: &VillageState,
        memory: RouteMemory,
        _ctx:   &RobotContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Move> {
        Ok(Move { direction: self.0, memory })
    }

    fn name(&self) -> &'static str {
        "stubborn"
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use mb_core::CoreError;
    use mb_spatial::SpatialError;

    use super::*;

    #[test]
    fn builds_a_random_world_at_the_start_place() {
        let sim = village_sim(RobotKind::Goal, 1);
        let hub = sim.graph().node(village::HUB).unwrap();
        assert_eq!(sim.state().place, hub);
        assert_eq!(sim.state().parcel_count(), 5);
        assert_eq!(sim.turn(), Turn::ZERO);
        assert!(sim.memory().is_empty());
    }

    #[test]
    fn unknown_start_place_errors() {
        let config = SimConfig { start_place: "Lighthouse".into(), ..SimConfig::default() };
        let result = SimBuilder::new(config, line(), RandomRobot).build();
        assert!(matches!(
            result.err(),
            Some(SimError::Spatial(SpatialError::UnknownPlace(p))) if p == "Lighthouse"
        ));
    }

    #[test]
    fn empty_start_place_errors() {
        let config = SimConfig { start_place: String::new(), ..SimConfig::default() };
        let result = SimBuilder::new(config, line(), RandomRobot).build();
        assert!(matches!(result.err(), Some(SimError::Core(CoreError::Config(_)))));
    }

    #[test]
    fn foreign_initial_state_errors() {
        let result = SimBuilder::new(line_config(), line(), RandomRobot)
            .initial_state(VillageState::new(NodeId(40), vec![]))
            .build();
        assert!(matches!(result.err(), Some(SimError::Config(_))));
    }

    #[test]
    fn foreign_parcel_ids_errors() {
        let g = line();
        let a = g.node("A").unwrap();
        let result = SimBuilder::new(line_config(), g, RandomRobot)
            .initial_state(VillageState::new(a, vec![Parcel::new(a, NodeId(40))]))
            .build();
        assert!(matches!(result.err(), Some(SimError::Config(msg)) if msg.contains("parcel 0")));
    }

    #[test]
    fn initial_state_does_not_need_the_start_place() {
        // The default start place is "Post Office", which the line lacks.
        let g = line();
        let (a, b, c) = (g.node("A").unwrap(), g.node("B").unwrap(), g.node("C").unwrap());
        let config = SimConfig { parcel_count: 1, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config, g, RandomRobot)
            .initial_state(VillageState::new(b, vec![Parcel::new(a, c)]))
            .build()
            .unwrap();
        assert_eq!(sim.state().place, b);

        sim.reset().unwrap();
        assert_eq!(sim.state().place, b);
        assert_eq!(sim.state().parcel_count(), 1);
    }

    #[test]
    fn same_seed_same_world() {
        let a = village_sim(RobotKind::Random, 9);
        let b = village_sim(RobotKind::Random, 9);
        assert_eq!(a.state(), b.state());
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn carry_then_deliver_on_a_line() {
        let g = line();
        let (a, b, c) = (g.node("A").unwrap(), g.node("B").unwrap(), g.node("C").unwrap());
        let mut sim = SimBuilder::new(line_config(), g, GoalRobot::<mb_spatial::BfsRouter>::default())
            .initial_state(VillageState::new(a, vec![Parcel::new(a, c)]))
            .build()
            .unwrap();

        let r1 = sim.step().unwrap();
        assert_eq!(r1.turn, Turn(1));
        assert_eq!(r1.event, TurnEvent::Moved { to: b });
        assert_eq!(r1.state, VillageState { place: b, parcels: vec![Parcel::new(b, c)] });

        let r2 = sim.step().unwrap();
        assert_eq!(r2.turn, Turn(2));
        assert_eq!(r2.event, TurnEvent::Delivered { at: c, count: 1 });
        assert!(r2.state.is_complete());
        assert!(sim.is_complete());
    }

    #[test]
    fn step_after_completion_errors() {
        let g = line();
        let a = g.node("A").unwrap();
        let mut sim = SimBuilder::new(line_config(), g, RandomRobot)
            .initial_state(VillageState::new(a, vec![]))
            .build()
            .unwrap();
        assert_eq!(sim.step(), Err(SimError::AlreadyComplete { turns: 0 }));
    }

    #[test]
    fn illegal_direction_is_blocked_not_fatal() {
        let g = line();
        let (a, c) = (g.node("A").unwrap(), g.node("C").unwrap());
        let start = VillageState::new(a, vec![Parcel::new(a, c)]);
        let mut sim = SimBuilder::new(line_config(), g, Stubborn(c))
            .initial_state(start.clone())
            .build()
            .unwrap();

        let report = sim.step().unwrap();
        assert_eq!(report.event, TurnEvent::Blocked { toward: c });
        assert_eq!(report.state, start);
        assert_eq!(sim.turn(), Turn(1));
    }

    #[test]
    fn self_loop_walk_is_a_move() {
        let g = RoadGraph::from_edges(&["A-A", "A-B"]).unwrap();
        let (a, b) = (g.node("A").unwrap(), g.node("B").unwrap());
        let start = VillageState::new(a, vec![Parcel::new(b, a)]);
        let mut sim = SimBuilder::new(line_config(), g, Stubborn(a))
            .initial_state(start.clone())
            .build()
            .unwrap();

        let report = sim.step().unwrap();
        assert_eq!(report.event, TurnEvent::Moved { to: a });
        assert_eq!(report.state, start);
    }

    #[test]
    fn strategy_failure_leaves_state_intact() {
        let g = RoadGraph::from_edges(&["A-B", "X-Y"]).unwrap();
        let (a, x, y) = (g.node("A").unwrap(), g.node("X").unwrap(), g.node("Y").unwrap());
        let start = VillageState::new(a, vec![Parcel::new(x, y)]);
        let mut sim = SimBuilder::new(line_config(), g, GoalRobot::<mb_spatial::BfsRouter>::default())
            .initial_state(start.clone())
            .build()
            .unwrap();

        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimError::Behavior(BehaviorError::Routing(_))));
        assert_eq!(sim.state(), &start);
        assert_eq!(sim.turn(), Turn::ZERO);
    }

    #[test]
    fn snapshots_do_not_alias_live_state() {
        let mut sim = village_sim(RobotKind::Goal, 2);
        let first = sim.step().unwrap();
        let kept = first.state.clone();
        sim.run_turns(5, &mut NoopObserver).unwrap();
        assert_eq!(first.state, kept);
    }

    #[test]
    fn memory_carries_between_turns() {
        let mut sim = village_sim(RobotKind::Route, 3);
        sim.step().unwrap();
        // The mail route has 13 stops; one has been taken.
        assert_eq!(sim.memory().len(), 12);
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn every_robot_completes_the_village() {
        for kind in RobotKind::ALL {
            let mut sim = village_sim(kind, 21);
            let mut rec = Recorder::default();
            let outcome = sim.run(&mut rec).unwrap();

            assert!(outcome.is_completed(), "{kind} robot: {outcome:?}");
            assert_eq!(outcome.turns(), sim.turn().0);
            assert_eq!(rec.reports.len() as u64, outcome.turns());
            assert_eq!(rec.completed, Some(sim.turn()));
            assert_eq!(rec.ended, Some(outcome));
            assert!(sim.is_complete());
        }
    }

    #[test]
    fn deliveries_add_up_to_the_parcel_count() {
        let mut sim = village_sim(RobotKind::Goal, 8);
        let initial = sim.state().parcel_count();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let delivered: usize = rec
            .reports
            .iter()
            .map(|r| match r.event {
                TurnEvent::Delivered { count, .. } => count,
                _ => 0,
            })
            .sum();
        assert_eq!(delivered, initial);
        assert!(rec.reports.last().unwrap().event.is_delivery());
    }

    #[test]
    fn goal_robot_terminates_for_many_seeds() {
        for seed in 0..100 {
            let mut sim = village_sim(RobotKind::Goal, seed);
            let outcome = sim.run(&mut NoopObserver).unwrap();
            assert!(outcome.is_completed());
            assert!(outcome.turns() <= 5 * 2 * 11, "seed {seed}: {outcome:?}");
        }
    }

    #[test]
    fn run_on_a_complete_world_returns_immediately() {
        let g = line();
        let a = g.node("A").unwrap();
        let mut sim = SimBuilder::new(line_config(), g, RandomRobot)
            .initial_state(VillageState::new(a, vec![]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        assert_eq!(sim.run(&mut rec).unwrap(), RunOutcome::Completed { turns: 0 });
        assert!(rec.reports.is_empty());
    }

    #[test]
    fn turn_limit_stops_the_loop() {
        let g = line();
        let a = g.node("A").unwrap();
        let config = SimConfig { max_turns: 4, ..line_config() };
        // Stubborn never makes progress.
        let mut sim = SimBuilder::new(config, g, Stubborn(a))
            .initial_state(VillageState::new(a, vec![Parcel::new(NodeId(1), NodeId(2))]))
            .build()
            .unwrap();
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), RunOutcome::TurnLimit { turns: 4 });
    }

    #[test]
    fn run_turns_stops_early_when_complete() {
        let mut sim = village_sim(RobotKind::Goal, 5);
        let played = sim.run_turns(10_000, &mut NoopObserver).unwrap();
        assert!(sim.is_complete());
        assert_eq!(played, sim.turn().0);
        assert_eq!(sim.run_turns(3, &mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = village_sim(RobotKind::Random, 77);
        let mut b = village_sim(RobotKind::Random, 77);
        let (mut ra, mut rb) = (Recorder::default(), Recorder::default());
        a.run(&mut ra).unwrap();
        b.run(&mut rb).unwrap();
        assert_eq!(ra.reports, rb.reports);
    }
}

// ── Halting and reset ─────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    /// Halts the loop after `after` turns.
    struct HaltAfter {
        after: u64,
        halt:  HaltHandle,
    }

    impl SimObserver for HaltAfter {
        fn on_turn(&mut self, report: &TurnReport) {
            if report.turn.0 >= self.after {
                self.halt.halt();
            }
        }
    }

    #[test]
    fn halt_between_turns() {
        let mut sim = village_sim(RobotKind::Random, 13);
        let mut obs = HaltAfter { after: 3, halt: sim.halt_handle() };
        let outcome = sim.run(&mut obs).unwrap();
        assert_eq!(outcome, RunOutcome::Halted { turns: 3 });
        assert_eq!(sim.turn(), Turn(3));
    }

    #[test]
    fn halted_before_start() {
        let halt = HaltHandle::new();
        halt.halt();
        let graph = village::graph().unwrap();
        let mut sim = SimBuilder::new(test_config(1), graph, RandomRobot)
            .halt_handle(halt.clone())
            .build()
            .unwrap();
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), RunOutcome::Halted { turns: 0 });

        halt.resume();
        assert!(sim.run(&mut NoopObserver).unwrap().is_completed());
    }

    #[test]
    fn reset_keeps_drawing_from_the_seeded_stream() {
        let mut a = village_sim(RobotKind::Goal, 10);
        let mut b = village_sim(RobotKind::Goal, 10);
        let first = a.state().clone();

        a.reset().unwrap();
        b.reset().unwrap();
        assert_ne!(a.state(), &first);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn reset_starts_over() {
        let mut sim = village_sim(RobotKind::Goal, 4);
        sim.run_turns(3, &mut NoopObserver).unwrap();
        sim.halt_handle().halt();

        sim.reset().unwrap();
        let hub = sim.graph().node(village::HUB).unwrap();
        assert_eq!(sim.turn(), Turn::ZERO);
        assert_eq!(sim.state().place, hub);
        assert_eq!(sim.state().parcel_count(), 5);
        assert!(sim.memory().is_empty());
        assert!(!sim.halt_handle().is_halted());
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn tracing_observer_lines() {
        let g = line();
        let (a, b) = (g.node("A").unwrap(), g.node("B").unwrap());
        let obs = TracingObserver::new(&g);
        let state = VillageState::new(b, vec![]);

        let moved = TurnReport { turn: Turn(1), state: state.clone(), event: TurnEvent::Moved { to: b } };
        assert_eq!(obs.describe(&moved), "step 1: moving to B");

        let one = TurnReport { turn: Turn(2), state: state.clone(), event: TurnEvent::Delivered { at: b, count: 1 } };
        assert_eq!(obs.describe(&one), "step 2: delivery made at B");

        let two = TurnReport { turn: Turn(3), state: state.clone(), event: TurnEvent::Delivered { at: b, count: 2 } };
        assert_eq!(obs.describe(&two), "step 3: 2 deliveries made at B");

        let blocked = TurnReport { turn: Turn(4), state, event: TurnEvent::Blocked { toward: a } };
        assert_eq!(obs.describe(&blocked), "step 4: no road to A, staying put");
    }

    #[test]
    fn tracing_observer_runs_without_a_subscriber() {
        let mut sim = village_sim(RobotKind::Goal, 6);
        let graph = village::graph().unwrap();
        let mut obs = TracingObserver::new(&graph);
        assert!(sim.run(&mut obs).unwrap().is_completed());
    }

    #[test]
    fn run_outcome_turns() {
        assert_eq!(RunOutcome::Completed { turns: 3 }.turns(), 3);
        assert_eq!(RunOutcome::Halted { turns: 4 }.turns(), 4);
        assert_eq!(RunOutcome::TurnLimit { turns: 5 }.turns(), 5);
        assert!(!RunOutcome::Halted { turns: 0 }.is_completed());
    }
}
