//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MtError` where they
//! need to surface a core failure.

use thiserror::Error;

/// The top-level error type for `mt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("timestamp {0} is outside the representable calendar range")]
    Timestamp(i64),
}

/// Shorthand result type for all `mt-*` crates.
pub type MtResult<T> = Result<T, MtError>;
