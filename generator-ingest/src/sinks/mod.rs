use std::{fs, path::Path};

use generator_model::domain::Dataset;

use crate::pipeline::{Envelope, PipelineError};

pub mod csv_file;
pub mod ndjson_file;

pub use csv_file::CsvFileSink;
pub use ndjson_file::NdjsonFileSink;

/// `<kind>_<year>.<extension>`, e.g. `operating_2018.csv`.
pub fn output_file_name(input: &Envelope<Dataset>, extension: &str) -> String {
    format!("{}_{}.{extension}", input.payload.kind(), input.year)
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|e| {
        PipelineError::Sink(format!("failed to create output dir {}: {e}", dir.display()))
    })
}

/// Record write metrics for a dataset that reached its destination.
pub(crate) fn record_written(input: &Envelope<Dataset>) {
    let kind = input.payload.kind().as_str();
    metrics::counter!("datasets_written_total", "dataset" => kind).increment(1);
    metrics::counter!("records_written_total", "dataset" => kind)
        .increment(input.payload.len() as u64);

    if let Ok(dur) = std::time::SystemTime::now().duration_since(input.received_at) {
        metrics::histogram!("dataset_end_to_end_latency_seconds").record(dur.as_secs_f64());
    }
}
