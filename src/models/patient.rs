//! Patient entity model
//!
//! A patient is a [`Person`] plus the ordered list of their inflammation
//! observations. Insertion order is chronological order.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::observation::Observation;
use crate::models::person::Person;

/// Identity of a patient
///
/// A random v4 UUID issued once when a [`Patient`] is constructed. Clones
/// share it, so a clone counts as the same patient. Two patients created
/// separately are distinct even if their names match, including patients
/// restored from serialized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(Uuid);

impl PatientId {
    fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "patient-{}", self.0)
    }
}

/// A patient in an inflammation study
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    person: Person,
    observations: Vec<Observation>,
}

impl Patient {
    /// Create a new patient with no observations
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PatientId::new_v4(),
            person: Person::new(name),
            observations: Vec::new(),
        }
    }

    /// Identity of this patient
    #[must_use]
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Underlying person
    #[must_use]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Observations in the order they were added
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Record a new observation
    ///
    /// Without an explicit `day` the observation is placed one day after the
    /// last recorded one, or on day 0 for the first observation. After a last
    /// day of `u32::MAX` the next day stays at `u32::MAX`. Explicit days are
    /// stored as given, even when out of order or repeated.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> &Observation {
        let day = day.unwrap_or_else(|| {
            self.observations
                .last()
                .map_or(0, |last| last.day().saturating_add(1))
        });

        self.observations.push(Observation::new(day, value));
        &self.observations[self.observations.len() - 1]
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Patient {}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
