use mb_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("cannot place {requested} parcels on a graph with {places} place(s)")]
    TooFewPlaces { requested: usize, places: usize },

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type WorldResult<T> = Result<T, WorldError>;
