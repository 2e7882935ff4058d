//! Logging helpers
//!
//! Shared message formats for file loading, normalisation repairs and
//! record conflicts, so every caller reports them the same way.

use std::path::Path;
use std::time::Duration;

/// Log that a file operation is starting
///
/// # Arguments
/// * `operation` - Description of the operation, e.g. "Loading inflammation data from"
/// * `path` - File or directory being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log a completed file operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "loaded"
/// * `path` - File the operation read
/// * `patients` - Number of patient rows produced
/// * `elapsed` - Time taken, when measured
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    patients: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {patients} patients from {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {patients} patients from {}", path.display()),
    }
}

/// Log a non-fatal problem, optionally tied to a path
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log how many entries the normalisation repair passes changed
///
/// # Arguments
/// * `undefined` - Entries replaced because they were NaN
/// * `negative` - Entries clamped because they were negative
/// * `patients` - Number of patient rows normalised
pub fn log_repairs(undefined: usize, negative: usize, patients: usize) {
    if undefined == 0 && negative == 0 {
        return;
    }
    log::debug!(
        "Normalisation repaired {undefined} undefined and {negative} negative values across {patients} patients"
    );
}

/// Report a patient that a doctor already holds
///
/// # Arguments
/// * `patient` - Name of the rejected patient
/// * `doctor` - Name of the doctor holding them
pub fn log_patient_conflict(patient: &str, doctor: &str) {
    log::warn!("Patient with name {patient} already in Doctor {doctor}'s list.");
}
