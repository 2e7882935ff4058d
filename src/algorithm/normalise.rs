//! Per-patient normalisation
//!
//! Every patient's readings are rescaled to that patient's own maximum. The
//! arithmetic runs first and is allowed to produce undefined results (0/0,
//! x/NaN). Two named repair passes then fix those results:
//!
//! 1. [`replace_undefined`] turns every NaN into 0
//! 2. [`clamp_negative`] turns every negative value into 0
//!
//! Rows that are all zero or all missing therefore normalise to all zeros.

use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, DataMut, Ix2, Zip};

use crate::config::InflammationConfig;
use crate::error::{InflammationError, Result};
use crate::loader::matrix_from_rows;
use crate::utils::logging::log_repairs;

const NEGATIVE_VALUES: &str = "Inflammation values should not be negative";

/// Normalise patient data from a 2D inflammation data array
///
/// Missing (NaN) readings are ignored when finding each patient's maximum and
/// end up as 0 in the result. Negative results are clamped to 0.
///
/// # Errors
/// Returns `InvalidInput` if any reading is negative. The check covers the
/// whole matrix and runs before any arithmetic.
pub fn patient_normalise<S>(data: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    patient_normalise_with_config(data, &InflammationConfig::default())
}

/// Normalise patient data, honouring the repair logging setting in `config`
pub fn patient_normalise_with_config<S>(
    data: &ArrayBase<S, Ix2>,
    config: &InflammationConfig,
) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_non_negative(data.iter())?;

    let max_per_patient = patient_max(data);

    // 0/0, x/NaN and NaN/NaN yield NaN here; the repair passes below handle them
    let mut normalised = data.to_owned();
    Zip::from(normalised.rows_mut())
        .and(&max_per_patient)
        .for_each(|mut row, &max| row.mapv_inplace(|value| value / max));

    let undefined = replace_undefined(&mut normalised);
    let negative = clamp_negative(&mut normalised);

    if config.log_repairs {
        log_repairs(undefined, negative, normalised.nrows());
    }

    Ok(normalised)
}

/// Normalise patient data supplied as nested rows
///
/// The negative value check runs over every reading before the rows are
/// checked for a rectangular shape.
///
/// # Errors
/// Returns `InvalidInput` for negative readings and `TypeMismatch` when the
/// rows differ in length.
pub fn patient_normalise_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    ensure_non_negative(rows.iter().flatten())?;
    let data = matrix_from_rows(rows)?;
    patient_normalise(&data)
}

/// Maximum reading of each patient, skipping missing values
///
/// A patient with no defined readings gets a NaN maximum.
pub fn patient_max<S>(data: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    data.map_axis(Axis(1), |row| {
        row.iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f64::max)
            .unwrap_or(f64::NAN)
    })
}

/// Replace every undefined (NaN) entry with 0
///
/// # Returns
/// Number of entries replaced
pub fn replace_undefined<S>(data: &mut ArrayBase<S, Ix2>) -> usize
where
    S: DataMut<Elem = f64>,
{
    repair(data, f64::is_nan)
}

/// Clamp every negative entry to 0
///
/// # Returns
/// Number of entries clamped
pub fn clamp_negative<S>(data: &mut ArrayBase<S, Ix2>) -> usize
where
    S: DataMut<Elem = f64>,
{
    repair(data, |value| value < 0.0)
}

fn repair<S, F>(data: &mut ArrayBase<S, Ix2>, needs_repair: F) -> usize
where
    S: DataMut<Elem = f64>,
    F: Fn(f64) -> bool,
{
    let mut repaired = 0;
    for value in data.iter_mut() {
        if needs_repair(*value) {
            *value = 0.0;
            repaired += 1;
        }
    }
    repaired
}

fn ensure_non_negative<'a>(mut values: impl Iterator<Item = &'a f64>) -> Result<()> {
    match values.find_position(|&&value| value < 0.0) {
        Some((position, value)) => {
            log::warn!("Rejected normalisation: value {value} at flat position {position} is negative");
            Err(InflammationError::InvalidInput(NEGATIVE_VALUES.to_string()))
        }
        None => Ok(()),
    }
}
