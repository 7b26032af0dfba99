//! `mb-world` — the village state and its transition function.
//!
//! # Crate layout
//!
//! | Module    | Contents                                           |
//! |-----------|----------------------------------------------------|
//! | [`state`] | `Parcel`, `VillageState`                           |
//! | [`error`] | `WorldError`, `WorldResult<T>`                     |
//!
//! # Transition model
//!
//! A `VillageState` is a value.  [`VillageState::move_to`] never mutates its
//! receiver; it returns the next state:
//!
//! 1. A destination that is not a road away leaves the world unchanged.
//! 2. Otherwise every parcel lying at the robot's feet travels with it.
//! 3. Parcels that end up at their address are delivered and dropped.
//!
//! Renderers may keep any earlier snapshot around; nothing is shared between
//! snapshots.

pub mod error;
pub mod state;


pub use error::{WorldError, WorldResult};
pub use state::{Parcel, VillageState};
