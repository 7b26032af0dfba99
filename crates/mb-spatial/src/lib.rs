//! `mb-spatial` — road graph, routing, and place layout.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadGraph` (interned adjacency lists), `RoadGraphBuilder`  |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`                        |
//! | [`layout`]  | `Layout`, `Point` — 2-D positions for renderers             |
//! | [`village`] | The bundled village: roads, coordinates, mail route         |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod layout;
pub mod network;
pub mod router;
pub mod village;


pub use error::{SpatialError, SpatialResult};
pub use layout::{Layout, Point};
pub use network::{RoadGraph, RoadGraphBuilder};
pub use router::{BfsRouter, Route, Router};
