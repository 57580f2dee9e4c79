use thiserror::Error;

use mt_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("please select both starting point and destination")]
    MissingEndpoint,

    #[error("starting point and destination cannot be the same ({0:?})")]
    SameEndpoints(String),

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type RouteResult<T> = Result<T, RouteError>;
