use std::path::PathBuf;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Directory for files written by tests
#[must_use]
pub fn test_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("inflammation-tests");
    std::fs::create_dir_all(&dir).expect("create test data directory");
    dir
}

/// Write `contents` to a uniquely named file under the test data directory
#[must_use]
pub fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = test_data_dir().join(format!("{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write test fixture");
    path
}

/// Random non-negative matrix with roughly `missing_rate` of entries NaN
#[must_use]
pub fn random_matrix(seed: u64, patients: usize, days: usize, missing_rate: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((patients, days), |_| {
        if rng.random_bool(missing_rate) {
            f64::NAN
        } else {
            rng.random_range(0.0..20.0)
        }
    })
}

/// Element-wise equality that treats NaN as equal to NaN
#[must_use]
pub fn same_values(left: &Array2<f64>, right: &Array2<f64>) -> bool {
    left.dim() == right.dim()
        && left
            .iter()
            .zip(right.iter())
            .all(|(a, b)| (a.is_nan() && b.is_nan()) || a == b)
}
