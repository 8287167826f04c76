use std::time::SystemTime;

use generator_model::domain::{Dataset, DatasetKind, GeneratorRecord, ProposedRecord, RetiredRecord};

use crate::vintage::Vintage;

use super::{operating, proposed, retired, Envelope, PipelineError, TabularSource};

/// Entry point for building the classified generator views.
///
/// Holds no state besides the source; each call reads its sheet afresh and
/// is independent of every other call.
pub struct GeneratorDatasetBuilder<S> {
    source: S,
}

impl<S: TabularSource> GeneratorDatasetBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn operating(&self, year: u16) -> Result<Vec<GeneratorRecord>, PipelineError> {
        operating::build(&self.source, Vintage::for_year(year)?)
    }

    pub fn proposed(&self, year: u16) -> Result<Vec<ProposedRecord>, PipelineError> {
        proposed::build(&self.source, Vintage::for_year(year)?)
    }

    pub fn retired(&self, year: u16) -> Result<Vec<RetiredRecord>, PipelineError> {
        retired::build(&self.source, Vintage::for_year(year)?)
    }

    pub fn build(&self, year: u16, kind: DatasetKind) -> Result<Envelope<Dataset>, PipelineError> {
        let payload = match kind {
            DatasetKind::Operating => Dataset::Operating(self.operating(year)?),
            DatasetKind::Proposed => Dataset::Proposed(self.proposed(year)?),
            DatasetKind::Retired => Dataset::Retired(self.retired(year)?),
        };
        Ok(Envelope {
            payload,
            year,
            received_at: SystemTime::now(),
        })
    }
}
