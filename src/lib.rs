//! A Rust library for tracking patient inflammation readings and computing
//! daily statistics across a study cohort.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::InflammationConfig;
pub use error::{InflammationError, Result};

// Statistics
pub use algorithm::{
    daily_above_threshold, daily_max, daily_mean, daily_min, daily_std, patient_normalise,
    patient_normalise_rows,
};

// Records
pub use models::{Doctor, NewPatient, Observation, Patient, PatientId, Person};

// Loading
pub use loader::{load_csv, load_csv_files_parallel, matrix_from_rows, parse_delimited};
