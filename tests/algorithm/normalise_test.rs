//! Tests for per-patient normalisation

use approx::assert_abs_diff_eq;
use inflammation::algorithm::{
    clamp_negative, patient_max, patient_normalise_with_config, replace_undefined,
};
use inflammation::{InflammationConfig, InflammationError, patient_normalise};
use ndarray::{Array2, array};

use crate::utils::{random_matrix, same_values};

#[test]
fn test_normalised_values_within_unit_range() {
    for seed in 0..20 {
        let data = random_matrix(seed, 12, 40, 0.1);
        let result = patient_normalise(&data).unwrap();
        assert_eq!(result.dim(), data.dim());

        let max = patient_max(&data);
        for (row, &row_max) in result.rows().into_iter().zip(max.iter()) {
            if row_max.is_finite() && row_max > 0.0 {
                assert!(row.iter().all(|&value| (0.0..=1.0).contains(&value)));
            }
        }
    }
}

#[test]
fn test_each_row_reaches_one() {
    let data = random_matrix(7, 8, 30, 0.0);
    let result = patient_normalise(&data).unwrap();
    for row in result.rows() {
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(max, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_degenerate_rows_become_zero() {
    let data = array![
        [0.0, 0.0, 0.0, 0.0],
        [f64::NAN, f64::NAN, f64::NAN, f64::NAN],
        [0.0, f64::NAN, 0.0, f64::NAN],
        [1.0, 2.0, 3.0, 4.0]
    ];
    let result = patient_normalise(&data).unwrap();
    for row in 0..3 {
        assert!(result.row(row).iter().all(|&value| value == 0.0));
    }
    assert_eq!(result.row(3).to_vec(), vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_result_has_no_undefined_values() {
    let data = random_matrix(3, 10, 10, 0.5);
    let result = patient_normalise(&data).unwrap();
    assert!(result.iter().all(|value| !value.is_nan()));
}

#[test]
fn test_input_left_unchanged() {
    let data = random_matrix(11, 5, 15, 0.2);
    let before = data.clone();
    let _ = patient_normalise(&data).unwrap();
    assert!(same_values(&data, &before));
}

#[test]
fn test_negative_anywhere_is_invalid_input() {
    let data = array![[1.0, -1.0], [2.0, 3.0]];
    assert!(matches!(
        patient_normalise(&data),
        Err(InflammationError::InvalidInput(_))
    ));

    let mut data = random_matrix(5, 6, 6, 0.0);
    data[[5, 5]] = -0.001;
    assert!(matches!(
        patient_normalise(&data),
        Err(InflammationError::InvalidInput(_))
    ));
}

#[test]
fn test_negative_infinity_is_invalid_input() {
    let data = array![[1.0, f64::NEG_INFINITY]];
    assert!(matches!(
        patient_normalise(&data),
        Err(InflammationError::InvalidInput(_))
    ));
}

#[test]
fn test_normalise_without_repair_logging() {
    let config = InflammationConfig {
        log_repairs: false,
        ..Default::default()
    };
    let data = array![[0.0, 0.0], [2.0, 8.0]];
    let result = patient_normalise_with_config(&data, &config).unwrap();
    assert_eq!(result, array![[0.0, 0.0], [0.25, 1.0]]);
}

#[test]
fn test_empty_matrix_normalises_to_empty() {
    let data = Array2::<f64>::zeros((0, 4));
    assert_eq!(patient_normalise(&data).unwrap().dim(), (0, 4));
}

#[test]
fn test_repair_passes_on_views() {
    let mut data = array![[f64::NAN, -2.0], [1.0, 0.5]];
    {
        let mut top = data.slice_mut(ndarray::s![..1, ..]);
        assert_eq!(replace_undefined(&mut top), 1);
        assert_eq!(clamp_negative(&mut top), 1);
    }
    assert_eq!(data, array![[0.0, 0.0], [1.0, 0.5]]);
}
