//! Inflammation matrix loading utilities
//!
//! Reads delimited text (one patient per line, one day per field, no header)
//! into a patient-by-day `Array2<f64>`.

use itertools::Itertools;
use ndarray::Array2;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::InflammationConfig;
use crate::error::{InflammationError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Load a comma-delimited inflammation matrix from a file
pub fn load_csv(path: &Path) -> Result<Array2<f64>> {
    load_csv_with_config(path, &InflammationConfig::default())
}

/// Load a delimited inflammation matrix from a file using `config`
pub fn load_csv_with_config(path: &Path, config: &InflammationConfig) -> Result<Array2<f64>> {
    log_operation_start("Loading inflammation data from", path);
    let start = Instant::now();

    let text = fs::read_to_string(path).map_err(|e| InflammationError::io(path, e))?;
    let data = parse_delimited(&text, config)?;

    log_operation_complete("loaded", path, data.nrows(), Some(start.elapsed()));
    Ok(data)
}

/// Parse delimited text into a patient-by-day matrix
///
/// # Arguments
/// * `text` - Source text, one patient per line
/// * `config` - Delimiter and blank line handling
///
/// # Errors
/// * `Parse` when a field is not a number (`nan` is accepted as a missing reading)
/// * `TypeMismatch` when lines have different numbers of fields
pub fn parse_delimited(text: &str, config: &InflammationConfig) -> Result<Array2<f64>> {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if config.skip_blank_lines {
                continue;
            }
            rows.push(Vec::new());
            continue;
        }

        let row = line
            .split(config.delimiter)
            .enumerate()
            .map(|(field_idx, field)| parse_field(field, line_idx + 1, field_idx + 1))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    matrix_from_rows(&rows)
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<f64> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| InflammationError::Parse {
        line,
        column,
        value: field.to_string(),
    })
}

/// Build a matrix from nested rows
///
/// # Errors
/// Returns `TypeMismatch` when the rows are not all the same length.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let days = rows.first().map_or(0, Vec::len);

    if !rows.iter().map(Vec::len).all_equal() {
        let (row, found) = rows
            .iter()
            .map(Vec::len)
            .find_position(|&len| len != days)
            .unwrap_or((0, days));
        return Err(InflammationError::ragged(row, days, found));
    }

    let values: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), days), values)
        .map_err(|e| InflammationError::TypeMismatch(e.to_string()))
}

/// Find all CSV files directly inside a directory, sorted by path
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(InflammationError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "Directory does not exist"),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| InflammationError::io(dir, e))? {
        let path = entry.map_err(|e| InflammationError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        log_warning("No CSV files found", Some(dir));
    }
    Ok(files)
}

/// Load several inflammation files in parallel
///
/// Results keep the order of `paths`. The first failure is returned.
pub fn load_csv_files_parallel(
    paths: &[PathBuf],
    config: &InflammationConfig,
) -> Result<Vec<Array2<f64>>> {
    let matrices = paths
        .par_iter()
        .map(|path| load_csv_with_config(path, config))
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Successfully loaded {} inflammation matrices from {} files",
        matrices.len(),
        paths.len()
    );

    Ok(matrices)
}
