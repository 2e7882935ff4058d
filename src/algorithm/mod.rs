//! Statistical transforms over patient-by-day inflammation matrices
//!
//! The matrix is an `ndarray` 2D array of `f64` where each row holds one
//! patient's daily readings and each column holds one day across the cohort.

pub mod normalise;
pub mod statistics;

// Re-export commonly used items
pub use normalise::{
    clamp_negative, patient_max, patient_normalise, patient_normalise_rows,
    patient_normalise_with_config, replace_undefined,
};
pub use statistics::{daily_above_threshold, daily_max, daily_mean, daily_min, daily_std};
