use thiserror::Error;

use crate::storage::CsvError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Columns expected but not found: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Empty CSV file: {0}")]
    EmptyFile(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn from_csv(err: CsvError, path: &str) -> Self {
        match err {
            CsvError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ExtractError::InputNotFound(path.to_string())
            }
            CsvError::Io(e) => ExtractError::Io(e),
            CsvError::Csv(e) => ExtractError::Csv(e),
            CsvError::EmptyFile => ExtractError::EmptyFile(path.to_string()),
            CsvError::MissingColumns(cols) => ExtractError::MissingColumns(cols),
        }
    }

    pub(crate) fn from_write(err: CsvError, path: &str) -> Self {
        match err {
            CsvError::Io(source) => ExtractError::Write {
                path: path.to_string(),
                source,
            },
            // Failures once the csv writer's buffer spills surface as csv errors.
            CsvError::Csv(e) if e.is_io_error() => {
                let source = match e.into_kind() {
                    csv::ErrorKind::Io(source) => source,
                    other => std::io::Error::other(format!("{:?}", other)),
                };
                ExtractError::Write {
                    path: path.to_string(),
                    source,
                }
            }
            other => Self::from_csv(other, path),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
