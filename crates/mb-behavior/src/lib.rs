//! `mb-behavior` — delivery robot strategies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`model`]   | `Robot` trait, `Move`                                        |
//! | [`memory`]  | `RouteMemory` — the residual plan carried between turns      |
//! | [`context`] | `RobotContext<'a>` — read-only turn inputs                   |
//! | [`random`]  | `RandomRobot` — uniform random walk                          |
//! | [`route`]   | `RouteRobot` — follows a fixed closed tour                   |
//! | [`goal`]    | `GoalRobot<R>` — routes to the oldest parcel                 |
//! | [`kind`]    | `RobotKind` selector, `AnyRobot` dispatcher                  |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Design notes
//!
//! Every strategy is a pure function of `(state, memory)`: it reads the
//! world, consumes last turn's memory by value, and returns a direction plus
//! the memory for next turn.  The driver owns the memory and the RNG; robots
//! hold only immutable configuration.

pub mod context;
pub mod error;
pub mod goal;
pub mod kind;
pub mod memory;
pub mod model;
pub mod random;
pub mod route;


pub use context::RobotContext;
pub use error::{BehaviorError, BehaviorResult};
pub use goal::GoalRobot;
pub use kind::{AnyRobot, RobotKind};
pub use memory::RouteMemory;
pub use model::{Move, Robot};
pub use random::RandomRobot;
pub use route::RouteRobot;
