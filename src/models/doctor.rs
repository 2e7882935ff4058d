//! Doctor entity model
//!
//! A doctor is a [`Person`] plus the patients under their care. Patients are
//! held at most once, keyed by [`PatientId`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::patient::{Patient, PatientId};
use crate::models::person::Person;
use crate::utils::logging::log_patient_conflict;

/// Input accepted by [`Doctor::add_patient`]
#[derive(Debug, Clone)]
pub enum NewPatient {
    /// An already constructed patient
    Existing(Patient),
    /// A bare name; a fresh patient is created for it
    Name(String),
}

impl NewPatient {
    fn into_patient(self) -> Patient {
        match self {
            Self::Existing(patient) => patient,
            Self::Name(name) => Patient::new(name),
        }
    }
}

impl From<Patient> for NewPatient {
    fn from(patient: Patient) -> Self {
        Self::Existing(patient)
    }
}

impl From<&Patient> for NewPatient {
    fn from(patient: &Patient) -> Self {
        Self::Existing(patient.clone())
    }
}

impl From<String> for NewPatient {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for NewPatient {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// A doctor in an inflammation study
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    person: Person,
    patients: Vec<Patient>,
}

impl Doctor {
    /// Create a new doctor with no patients
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name),
            patients: Vec::new(),
        }
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

    /// Patients in the order they were added
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Whether this doctor already holds the patient with `id`
    #[must_use]
    pub fn has_patient(&self, id: PatientId) -> bool {
        self.patients.iter().any(|patient| patient.id() == id)
    }

    /// Look up a held patient
    #[must_use]
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id() == id)
    }

    /// Look up a held patient for recording observations
    pub fn patient_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|patient| patient.id() == id)
    }

    /// Add a patient to this doctor's list
    ///
    /// Accepts an existing [`Patient`] or a bare name. Returns the stored
    /// patient when it was added. If the doctor already holds a patient with
    /// the same id, nothing changes: a warning is logged and `None` is
    /// returned.
    pub fn add_patient(&mut self, patient: impl Into<NewPatient>) -> Option<&mut Patient> {
        let new_patient = patient.into().into_patient();

        if self.has_patient(new_patient.id()) {
            log_patient_conflict(new_patient.name(), self.name());
            return None;
        }

        self.patients.push(new_patient);
        self.patients.last_mut()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
