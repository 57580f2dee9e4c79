//! Caller-facing endpoint validation.

use mt_core::LocationId;
use mt_spatial::Geography;

use crate::{RouteError, RouteResult};

/// A validated pair of distinct, known endpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: LocationId,
    pub end:   LocationId,
}

impl RouteRequest {
    /// Resolve caller-supplied location keys.
    ///
    /// Missing or blank keys, identical keys, and keys absent from the
    /// geography are rejected in that order.
    pub fn resolve(
        start: Option<&str>,
        end:   Option<&str>,
        geo:   &Geography,
    ) -> RouteResult<Self> {
        let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
            return Err(RouteError::MissingEndpoint);
        };
        if start == end {
            return Err(RouteError::SameEndpoints(start.to_owned()));
        }
        let lookup = |key: &str| {
            geo.id_of(key)
                .ok_or_else(|| RouteError::UnknownLocation(key.to_owned()))
        };
        Ok(Self { start: lookup(start)?, end: lookup(end)? })
    }
}

fn non_blank(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty())
}
