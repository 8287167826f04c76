use std::{fs::File, path::PathBuf};

use generator_model::domain::Dataset;
use serde::Serialize;

use crate::pipeline::{Envelope, PipelineError, Sink};

use super::{ensure_dir, output_file_name, record_written};

/// Writes each dataset to `<output_dir>/<kind>_<year>.csv`, header first.
pub struct CsvFileSink {
    output_dir: PathBuf,
}

impl CsvFileSink {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn write_rows<T: Serialize>(
        &self,
        wtr: &mut csv::Writer<File>,
        rows: &[T],
    ) -> Result<(), PipelineError> {
        for row in rows {
            wtr.serialize(row)
                .map_err(|e| PipelineError::Sink(format!("failed to write CSV row: {e}")))?;
        }
        Ok(())
    }
}

impl Sink for CsvFileSink {
    fn write(&self, input: &Envelope<Dataset>) -> Result<(), PipelineError> {
        ensure_dir(&self.output_dir)?;
        let path = self.output_dir.join(output_file_name(input, "csv"));

        // Headers come from the fixed column list so empty datasets still
        // get one.
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|e| PipelineError::Sink(format!("failed to create {}: {e}", path.display())))?;
        wtr.write_record(input.payload.columns())
            .map_err(|e| PipelineError::Sink(format!("failed to write CSV header: {e}")))?;

        match &input.payload {
            Dataset::Operating(rows) => self.write_rows(&mut wtr, rows)?,
            Dataset::Proposed(rows) => self.write_rows(&mut wtr, rows)?,
            Dataset::Retired(rows) => self.write_rows(&mut wtr, rows)?,
        }
        wtr.flush()
            .map_err(|e| PipelineError::Sink(format!("failed to flush {}: {e}", path.display())))?;

        record_written(input);
        tracing::info!(
            path = %path.display(),
            rows = input.payload.len(),
            "dataset written"
        );
        Ok(())
    }
}
