use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use generator_model::domain::Dataset;
use serde::Serialize;

use crate::pipeline::{Envelope, PipelineError, Sink};

use super::{ensure_dir, output_file_name, record_written};

/// Writes each dataset as newline-delimited JSON, one record per line.
pub struct NdjsonFileSink {
    output_dir: PathBuf,
}

impl NdjsonFileSink {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

fn write_lines<T: Serialize>(out: &mut BufWriter<File>, rows: &[T]) -> Result<(), PipelineError> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)
            .map_err(|e| PipelineError::Sink(format!("failed to encode record: {e}")))?;
        out.write_all(b"\n")
            .map_err(|e| PipelineError::Sink(format!("failed to write record: {e}")))?;
    }
    Ok(())
}

impl Sink for NdjsonFileSink {
    fn write(&self, input: &Envelope<Dataset>) -> Result<(), PipelineError> {
        ensure_dir(&self.output_dir)?;
        let path = self.output_dir.join(output_file_name(input, "ndjson"));
        let file = File::create(&path)
            .map_err(|e| PipelineError::Sink(format!("failed to create {}: {e}", path.display())))?;
        let mut out = BufWriter::new(file);

        match &input.payload {
            Dataset::Operating(rows) => write_lines(&mut out, rows)?,
            Dataset::Proposed(rows) => write_lines(&mut out, rows)?,
            Dataset::Retired(rows) => write_lines(&mut out, rows)?,
        }
        out.flush()
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
