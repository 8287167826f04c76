use anyhow::Result;
use generator_ingest::{
    config::{AppConfig, SinkKind, SourceKind},
    metrics_textfile,
    observability,
    pipeline::{Envelope, GeneratorDatasetBuilder, PipelineError, Sink, TabularSource},
    sinks::{CsvFileSink, NdjsonFileSink},
    sources::{ArchiveSource, CsvDirSource},
    table::RawTable,
};
use generator_model::domain::Dataset;
use std::sync::Arc;

enum ConfiguredSource {
    Archive(ArchiveSource),
    CsvDir(CsvDirSource),
}

impl TabularSource for ConfiguredSource {
    fn open_sheet(
        &self,
        year: u16,
        sheet_name: &str,
        header_skip_rows: usize,
    ) -> Result<RawTable, PipelineError> {
        match self {
            Self::Archive(s) => s.open_sheet(year, sheet_name, header_skip_rows),
            Self::CsvDir(s) => s.open_sheet(year, sheet_name, header_skip_rows),
        }
    }
}

enum OutputSink {
    Csv(CsvFileSink),
    Ndjson(NdjsonFileSink),
}

impl Sink for OutputSink {
    fn write(&self, input: &Envelope<Dataset>) -> Result<(), PipelineError> {
        match self {
            Self::Csv(s) => s.write(input),
            Self::Ndjson(s) => s.write(input),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    if cfg.metrics.is_some() {
        metrics_textfile::init()?;
    }

    let source = match cfg.source.kind {
        SourceKind::Archive => ConfiguredSource::Archive(ArchiveSource::new(&cfg.source.path)),
        SourceKind::CsvDir => ConfiguredSource::CsvDir(CsvDirSource::new(&cfg.source.path)),
    };
    let sink = match cfg.sink.kind {
        SinkKind::Csv => OutputSink::Csv(CsvFileSink::new(&cfg.sink.output_dir)),
        SinkKind::Ndjson => OutputSink::Ndjson(NdjsonFileSink::new(&cfg.sink.output_dir)),
    };

    let builder = Arc::new(GeneratorDatasetBuilder::new(source));
    let sink = Arc::new(sink);

    // Each (year, dataset) build is independent; run them on the blocking pool.
    let jobs = cfg.jobs().into_iter().map(|(year, kind)| {
        let builder = builder.clone();
        let sink = sink.clone();
        tokio::task::spawn_blocking(move || -> Result<usize, PipelineError> {
            let env = builder.build(year, kind)?;
            sink.write(&env)?;
            Ok(env.payload.len())
        })
    });

    let results = futures::future::try_join_all(jobs).await?;
    let mut total = 0;
    for rows in results {
        total += rows?;
    }
    tracing::info!(jobs = cfg.jobs().len(), rows = total, "generator datasets complete");

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_textfile::write(&metrics_cfg.textfile_path)?;
    }

    Ok(())
}
