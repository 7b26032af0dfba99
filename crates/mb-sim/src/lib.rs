//! `mb-sim` — turn loop orchestrator for the mailbot simulator.
//!
//! # Turn loop
//!
//! ```text
//! while parcels remain (and not halted, and under max_turns):
//!   ① Decide   — Robot::next_move(state, memory)      → direction, memory'
//!   ② Apply    — state.move_to(direction)             → state'
//!   ③ Classify — road check, parcel counts            → TurnEvent
//!   ④ Report   — observer.on_turn(TurnReport)
//! ```
//!
//! The loop is synchronous and owns no timer.  Hosts that want pacing
//! (animation, UI event loops) call [`Sim::step`] themselves and check
//! [`Sim::is_complete`] in between; [`Sim::run`] is the same loop without
//! pauses.  A [`HaltHandle`] stops `run` between turns from anywhere.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mb_behavior::RobotKind;
//! use mb_core::SimConfig;
//! use mb_sim::{NoopObserver, SimBuilder};
//! use mb_spatial::village;
//!
//! let graph = village::graph()?;
//! let robot = RobotKind::Goal.build(&graph)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), graph, robot).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod halt;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{RunOutcome, TurnEvent, TurnReport};
pub use halt::HaltHandle;
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
