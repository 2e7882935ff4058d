//! Configuration for matrix loading and normalisation.

use std::fmt;

/// Configuration for reading inflammation matrices and running transforms
#[derive(Debug, Clone)]
pub struct InflammationConfig {
    /// Field delimiter for delimited text sources
    pub delimiter: char,
    /// Whether blank lines in a source are ignored instead of read as empty rows
    pub skip_blank_lines: bool,
    /// Log how many entries the normalisation repair passes changed
    pub log_repairs: bool,
}

impl Default for InflammationConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_blank_lines: true,
            log_repairs: true,
        }
    }
}

impl InflammationConfig {
    /// Use a different field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl fmt::Display for InflammationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inflammation Configuration:")?;
        writeln!(f, "  Delimiter: {:?}", self.delimiter)?;
        writeln!(f, "  Skip Blank Lines: {}", self.skip_blank_lines)?;
        writeln!(f, "  Log Repairs: {}", self.log_repairs)?;
        Ok(())
    }
}
