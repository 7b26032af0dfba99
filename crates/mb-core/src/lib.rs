//! `mb-core` — foundational types for the `mailbot` delivery simulator.
//!
//! This crate is a dependency of every other `mb-*` crate.  It has no `mb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `NodeId`                                       |
//! | [`turn`]   | `Turn` step counter                            |
//! | [`rng`]    | `SimRng` (seeded, deterministic)               |
//! | [`config`] | `SimConfig`                                    |
//! | [`error`]  | `CoreError`, `CoreResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use rng::SimRng;
pub use turn::Turn;
