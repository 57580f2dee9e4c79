//! Historical traffic reference data.
//!
//! Keyed by location display name, then calendar year.  A year may be
//! present with no level recorded; lookups treat that the same as a missing
//! year.  Values are validated on read, not on insert, so a table loaded
//! from a bad source is only rejected by the callers that care.

use std::collections::{BTreeMap, HashMap};

use crate::{MAX_LEVEL, MIN_LEVEL, TrafficError, TrafficResult};

#[derive(Clone, Debug, Default)]
pub struct TrafficBaseline {
    entries: HashMap<String, BTreeMap<i32, Option<f64>>>,
}

impl TrafficBaseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `level` for `name` in `year`, replacing any previous value.
    pub fn insert(&mut self, name: &str, year: i32, level: Option<f64>) {
        self.entries
            .entry(name.to_owned())
            .or_default()
            .insert(year, level);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: &str, year: i32, level: f64) -> Self {
        self.insert(name, year, Some(level));
        self
    }

    /// Historical level for `name` in `year`.
    ///
    /// `Ok(None)` when the name, the year or the level is missing.
    /// `Err(MalformedBaseline)` when the stored level is not a finite value
    /// in `[0, 100]`.
    pub fn level(&self, name: &str, year: i32) -> TrafficResult<Option<f64>> {
        let Some(level) = self.entries.get(name).and_then(|years| years.get(&year)).copied().flatten()
        else {
            return Ok(None);
        };
        if !level.is_finite() || !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(TrafficError::MalformedBaseline {
                name:  name.to_owned(),
                year,
                value: level,
            });
        }
        Ok(Some(level))
    }

    /// Years with an entry for `name`, ascending.
    pub fn years(&self, name: &str) -> Vec<i32> {
        self.entries
            .get(name)
            .map(|years| years.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of locations with at least one year recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
