use mb_behavior::BehaviorError;
use mb_core::CoreError;
use mb_spatial::SpatialError;
use mb_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// `step` was called after every parcel had been delivered.
    #[error("all parcels already delivered after {turns} turns")]
    AlreadyComplete { turns: u64 },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("strategy failed: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
