//! Observation entity model
//!
//! A single daily inflammation reading belonging to one patient.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Representation of one inflammation reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Day of the study the reading was taken on
    day: u32,
    /// Measured inflammation
    value: f64,
}

impl Observation {
    /// Create a new observation
    #[must_use]
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }

    /// Day the reading was taken on
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Measured value
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
