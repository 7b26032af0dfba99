use mb_core::NodeId;
use mb_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    /// Strategies are only ever asked for a move while parcels remain.
    #[error("no parcels left to deliver")]
    NoParcels,

    #[error("{0} has no roads leading out")]
    DeadEnd(NodeId),

    /// A freshly computed route had no stops, i.e. the target was the
    /// robot's own place.
    #[error("empty route planned at {at}")]
    EmptyRoute { at: NodeId },

    #[error("unknown robot {0:?} (expected \"random\", \"route\" or \"goal\")")]
    UnknownRobot(String),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
