//! Logging utilities for operation reporting

pub mod log;

pub use log::{
    log_operation_complete, log_operation_start, log_patient_conflict, log_repairs, log_warning,
};
