use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("malformed baseline for {name:?} in {year}: level {value} is not within [0, 100]")]
    MalformedBaseline { name: String, year: i32, value: f64 },

    #[error("baseline parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
