//! Column subset extraction for the OpenPowerlifting CSV export.
//!
//! [`SubsetExtractor::run`] is the whole program: load the input restricted to
//! [`SUBSET_COLUMNS`], report the row count, write the subset without an index column.
//! The input is read and validated in full before the output file is opened, so a bad
//! input never leaves an output file behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info};

use crate::error::{ExtractError, Result};
use crate::storage::{CsvReader, CsvWriter, Table};

pub const DEFAULT_INPUT: &str = "openpowerlifting-dataset.csv";
pub const DEFAULT_OUTPUT: &str = "openpowerlifting_subset.csv";

/// Columns kept in the subset, in output order.
pub const SUBSET_COLUMNS: [&str; 17] = [
    "Name",
    "Sex",
    "Equipment",
    "Age",
    "Division",
    "BodyweightKg",
    "WeightClassKg",
    "Best3SquatKg",
    "Best3BenchKg",
    "Best3DeadliftKg",
    "TotalKg",
    "Dots",
    "Tested",
    "Country",
    "State",
    "Federation",
    "Date",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SubsetExtractor {
    input: PathBuf,
    output: PathBuf,
    columns: Vec<String>,
    delimiter: u8,
}

impl Default for SubsetExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl SubsetExtractor {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            columns: SUBSET_COLUMNS.iter().map(|c| c.to_string()).collect(),
            delimiter: b',',
        }
    }

    pub fn with_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Delimiter for both the input and the output file.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn load(&self) -> Result<Table> {
        let started = Instant::now();
        let table = CsvReader::new()
            .with_delimiter(self.delimiter)
            .with_columns(&self.columns)
            .read_file(&self.input)
            .map_err(|e| ExtractError::from_csv(e, &self.input.to_string_lossy()))?;

        info!(
            input = %self.input.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded subset"
        );
        Ok(table)
    }

    /// Overwrites the output file. A failure part way may leave it truncated.
    pub fn save(&self, table: &Table) -> Result<()> {
        let started = Instant::now();
        CsvWriter::new()
            .with_delimiter(self.delimiter)
            .write_file(table, &self.output)
            .map_err(|e| {
                error!(output = %self.output.display(), "failed to write subset: {}", e);
                ExtractError::from_write(e, &self.output.to_string_lossy())
            })?;

        debug!(
            output = %self.output.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "wrote subset"
        );
        Ok(())
    }

    /// Loads, reports and saves, writing progress lines to `progress`.
    pub fn run<W: Write>(&self, progress: &mut W) -> Result<ExtractSummary> {
        writeln!(progress, "Loading CSV...")?;
        let table = self.load()?;

        writeln!(progress, "Rows loaded: {}", table.row_count())?;
        writeln!(progress, "Saving subset...")?;
        self.save(&table)?;

        writeln!(progress, "Saved as: {}", self.output.display())?;

        Ok(ExtractSummary {
            rows: table.row_count(),
            columns: table.column_count(),
            output: self.output.clone(),
        })
    }
}
