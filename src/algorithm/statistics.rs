//! Daily cohort statistics
//!
//! Each function reads a patient-by-day matrix (rows are patients, columns are
//! days) and aggregates down the patient axis, producing one value per day.
//! None of them modify their input.

use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

use crate::error::{InflammationError, Result};

/// Axis along which patients are stacked
const PATIENTS: Axis = Axis(0);

fn ensure_patients<S>(data: &ArrayBase<S, Ix2>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    if data.nrows() == 0 {
        return Err(InflammationError::EmptyMatrix);
    }
    Ok(())
}

/// Calculate the daily mean of a 2D inflammation data array
///
/// # Arguments
/// * `data` - Patient-by-day inflammation matrix
///
/// # Returns
/// The arithmetic mean of each day across all patients
pub fn daily_mean<S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_patients(data)?;
    data.mean_axis(PATIENTS).ok_or(InflammationError::EmptyMatrix)
}

/// Calculate the daily maximum of a 2D inflammation data array
///
/// A missing (NaN) reading on a day makes that day's maximum NaN.
pub fn daily_max<S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_patients(data)?;
    Ok(data.fold_axis(PATIENTS, f64::NEG_INFINITY, |&acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.max(value)
        }
    }))
}

/// Calculate the daily minimum of a 2D inflammation data array
///
/// A missing (NaN) reading on a day makes that day's minimum NaN.
pub fn daily_min<S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_patients(data)?;
    Ok(data.fold_axis(PATIENTS, f64::INFINITY, |&acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.min(value)
        }
    }))
}

/// Calculate the daily population standard deviation of a 2D inflammation data array
///
/// The divisor is the number of patients, not the number of patients minus one.
pub fn daily_std<S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_patients(data)?;
    Ok(data.std_axis(PATIENTS, 0.0))
}

/// Count the days on which a patient's inflammation is strictly above a threshold
///
/// # Arguments
/// * `data` - Patient-by-day inflammation matrix
/// * `patient_index` - Row of the patient to inspect
/// * `threshold` - Readings equal to the threshold do not count
///
/// # Returns
/// Number of days above the threshold. Missing (NaN) readings never count.
pub fn daily_above_threshold<S>(
    data: &ArrayBase<S, Ix2>,
    patient_index: usize,
    threshold: f64,
) -> Result<usize>
where
    S: Data<Elem = f64>,
{
    if patient_index >= data.nrows() {
        return Err(InflammationError::IndexOutOfBounds {
            index: patient_index,
            rows: data.nrows(),
        });
    }

    Ok(data
        .row(patient_index)
        .iter()
        .filter(|&&value| value > threshold)
        .count())
}
