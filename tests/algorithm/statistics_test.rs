//! Tests for daily statistics

use approx::assert_abs_diff_eq;
use inflammation::{
    InflammationError, daily_above_threshold, daily_max, daily_mean, daily_min, daily_std,
};
use ndarray::{Axis, array};

use crate::utils::random_matrix;

#[test]
fn test_two_by_two_statistics() {
    let data = array![[1.0, 2.0], [3.0, 4.0]];
    assert_eq!(daily_mean(&data).unwrap(), array![2.0, 3.0]);
    assert_eq!(daily_max(&data).unwrap(), array![3.0, 4.0]);
    assert_eq!(daily_min(&data).unwrap(), array![1.0, 2.0]);

    let std = daily_std(&data).unwrap();
    assert_abs_diff_eq!(std[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(std[1], 1.0, epsilon = 1e-12);
}

#[test]
fn test_one_value_per_day() {
    let data = random_matrix(1, 9, 25, 0.0);
    assert_eq!(daily_mean(&data).unwrap().len(), 25);
    assert_eq!(daily_max(&data).unwrap().len(), 25);
    assert_eq!(daily_min(&data).unwrap().len(), 25);
    assert_eq!(daily_std(&data).unwrap().len(), 25);
}

#[test]
fn test_mean_between_min_and_max() {
    let data = random_matrix(2, 15, 20, 0.0);
    let mean = daily_mean(&data).unwrap();
    let max = daily_max(&data).unwrap();
    let min = daily_min(&data).unwrap();
    for day in 0..data.len_of(Axis(1)) {
        assert!(min[day] <= mean[day] && mean[day] <= max[day]);
    }
}

#[test]
fn test_std_uses_patient_count_as_divisor() {
    let data = array![[2.0], [4.0], [4.0], [4.0], [5.0], [5.0], [7.0], [9.0]];
    let std = daily_std(&data).unwrap();
    assert_abs_diff_eq!(std[0], 2.0, epsilon = 1e-12);
}

#[test]
fn test_above_threshold_is_strict() {
    let data = array![[1.0, 5.0, 9.0], [2.0, 2.0, 2.0]];
    assert_eq!(daily_above_threshold(&data, 0, 3.0).unwrap(), 2);
    assert_eq!(daily_above_threshold(&data, 0, 9.0).unwrap(), 0);
    assert_eq!(daily_above_threshold(&data, 1, 2.0).unwrap(), 0);
}

#[test]
fn test_above_threshold_bad_index() {
    let data = array![[1.0, 5.0, 9.0]];
    assert!(matches!(
        daily_above_threshold(&data, 1, 0.0),
        Err(InflammationError::IndexOutOfBounds { index: 1, rows: 1 })
    ));
}
