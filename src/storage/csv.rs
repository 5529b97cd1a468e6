use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::table::{Column, Row, Schema, Table, Value};
use thiserror::Error;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Empty CSV file")]
    EmptyFile,
    #[error("Columns expected but not found: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Reads a headed CSV file into a [`Table`], optionally keeping only a named set of columns.
///
/// Selected columns come out in the order they were requested, not the order of the file
/// header. Every requested column has to be present in the header.
pub struct CsvReader {
    delimiter: u8,
    columns: Option<Vec<String>>,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            columns: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = Some(columns.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    pub fn read_file(&self, path: &Path) -> Result<Table, CsvError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("table")
            .to_string();

        self.read_from_reader(reader, &table_name)
    }

    pub fn read_from_reader<R: Read>(&self, reader: R, table_name: &str) -> Result<Table, CsvError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let header: Vec<String> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if header.is_empty() {
            return Err(CsvError::EmptyFile);
        }

        let file_schema = Schema::from_names(&header);
        let (schema, positions) = self.project(&file_schema)?;
        debug!(
            table = table_name,
            header_columns = file_schema.column_count(),
            selected_columns = schema.column_count(),
            "resolved column positions {:?}",
            positions
        );

        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        while rdr.read_record(&mut record)? {
            // Ragged records are rejected by the reader, so every position is in range.
            // Short rows fail too; they are not padded with missing values.
            let values = positions
                .iter()
                .map(|&i| Value::from_field(record.get(i).unwrap_or("")))
                .collect();
            rows.push(Row::new(values));
        }

        Ok(Table::with_rows(table_name, schema, rows))
    }

    /// Resolves the selected columns against the file header.
    fn project(&self, file_schema: &Schema) -> Result<(Schema, Vec<usize>), CsvError> {
        let Some(selected) = &self.columns else {
            let positions = (0..file_schema.column_count()).collect();
            return Ok((file_schema.clone(), positions));
        };

        let mut positions = Vec::with_capacity(selected.len());
        let mut missing = Vec::new();
        for name in selected {
            match file_schema.column_index(name) {
                Some(i) => positions.push(i),
                None => missing.push(name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(CsvError::MissingColumns(missing));
        }

        let columns = selected.iter().map(|n| Column::new(n.as_str())).collect();
        Ok((Schema::new(columns), positions))
    }
}

/// Writes a [`Table`] as CSV: header row first, then one record per row, no index column.
pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Creates or truncates `path`.
    pub fn write_file(&self, table: &Table, path: &Path) -> Result<(), CsvError> {
        let file = File::create(path)?;
        self.write_to_writer(table, file)
    }

    pub fn write_to_writer<W: Write>(&self, table: &Table, writer: W) -> Result<(), CsvError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(table.schema.column_names())?;
        for row in table.iter() {
            wtr.write_record(row.values.iter().map(Value::as_field))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
