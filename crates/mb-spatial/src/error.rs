//! Spatial-subsystem error type.

use thiserror::Error;

use mb_core::NodeId;

/// Errors produced by `mb-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    /// An edge descriptor did not split into exactly two non-empty places.
    #[error("malformed edge descriptor {0:?}: expected \"A-B\"")]
    MalformedEdge(String),

    #[error("unknown place {0:?}")]
    UnknownPlace(String),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
