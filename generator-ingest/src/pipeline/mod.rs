use std::time::SystemTime;

use generator_model::domain::Dataset;

use crate::table::RawTable;

pub mod builder;
pub mod operating;
pub mod proposed;
pub mod retired;

pub use builder::GeneratorDatasetBuilder;

#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub payload: T,
    pub year: u16,
    pub received_at: SystemTime,
}

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("unsupported reporting year {0} (supported: 2000, 2010, 2018)")]
    UnsupportedYear(u16),
    #[error("duplicate generator_uuid '{generator_uuid}' in {year} operating sheet")]
    DuplicateKey { year: u16, generator_uuid: String },
    #[error("missing required value in column '{column}' at data row {row}")]
    MissingRequiredValue { column: String, row: usize },
    #[error("column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { column: String, sheet: String },
    #[error("invalid value '{value}' in column '{column}'")]
    InvalidValue { column: String, value: String },
    #[error("source error: {0}")]
    Source(String),
    #[error("sink error: {0}")]
    Sink(String),
}

/// Supplies raw sheets from a year's published inventory.
///
/// `header_skip_rows` counts rows above the header row. Calls block until the
/// sheet is fully read.
pub trait TabularSource: Send + Sync {
    fn open_sheet(
        &self,
        year: u16,
        sheet_name: &str,
        header_skip_rows: usize,
    ) -> Result<RawTable, PipelineError>;
}

pub trait Sink: Send + Sync {
    fn write(&self, input: &Envelope<Dataset>) -> Result<(), PipelineError>;
}
