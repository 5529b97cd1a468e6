pub mod cli;
pub mod error;
pub mod extract;
pub mod storage;

pub use error::{ExtractError, Result};
pub use extract::{ExtractSummary, SubsetExtractor, DEFAULT_INPUT, DEFAULT_OUTPUT, SUBSET_COLUMNS};
pub use storage::table::{Table, Value, Schema, Column, Row};
