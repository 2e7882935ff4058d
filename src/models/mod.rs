//! Record model for people taking part in an inflammation study
//!
//! Entities are plain owned values. `Patient` and `Doctor` are built by
//! composing a [`Person`] with their own state.

pub mod doctor;
pub mod observation;
pub mod patient;
pub mod person;

// Re-export commonly used items
pub use doctor::{Doctor, NewPatient};
pub use observation::Observation;
pub use patient::{Patient, PatientId};
pub use person::Person;
