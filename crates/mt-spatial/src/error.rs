//! Spatial-subsystem error type.

use thiserror::Error;

use mt_core::LocationId;

/// Errors produced by `mt-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("location key {0:?} registered twice")]
    DuplicateLocation(String),

    #[error("location {0} not found in geography")]
    LocationNotFound(LocationId),

    #[error("geography is full: at most {max} locations are supported")]
    TooManyLocations { max: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
