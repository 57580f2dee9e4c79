use mt_core::MtError;
use mt_route::RouteError;
use mt_traffic::TrafficError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] MtError),

    #[error("traffic refresh failed: {0}")]
    Traffic(#[from] TrafficError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type SimResult<T> = Result<T, SimError>;
