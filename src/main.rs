use anyhow::Context;
use clap::Parser;
use inflammation::loader::{find_csv_files, load_csv_files_parallel};
use inflammation::{InflammationConfig, daily_max, daily_mean, daily_min, daily_std};
use log::{info, warn};
use ndarray::Array2;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-file daily statistics printed by the CLI
#[derive(Debug, Serialize)]
struct DailySummary {
    file: String,
    patients: usize,
    days: usize,
    daily_mean: Vec<f64>,
    daily_max: Vec<f64>,
    daily_min: Vec<f64>,
    daily_std: Vec<f64>,
}

impl DailySummary {
    fn from_matrix(path: &Path, data: &Array2<f64>) -> inflammation::Result<Self> {
        Ok(Self {
            file: path.display().to_string(),
            patients: data.nrows(),
            days: data.ncols(),
            daily_mean: daily_mean(data)?.to_vec(),
            daily_max: daily_max(data)?.to_vec(),
            daily_min: daily_min(data)?.to_vec(),
            daily_std: daily_std(data)?.to_vec(),
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "inflammation")]
#[command(about = "Print daily inflammation statistics for CSV files", long_about = None)]
struct Cli {
    /// Field delimiter of the input files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// CSV files, or directories containing them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> InflammationConfig {
        InflammationConfig::default().with_delimiter(self.delimiter)
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();

    let mut files = Vec::new();
    for input in cli.inputs {
        if input.is_dir() {
            files.extend(find_csv_files(&input)?);
        } else {
            files.push(input);
        }
    }

    if files.is_empty() {
        warn!("No inflammation files to analyse");
        return Ok(());
    }

    info!("Analysing {} inflammation files", files.len());
    let matrices = load_csv_files_parallel(&files, &config).context("Failed to load inflammation data")?;

    for (path, data) in files.iter().zip(&matrices) {
        let summary = DailySummary::from_matrix(path, data)
            .with_context(|| format!("Failed to summarise {}", path.display()))?;
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
