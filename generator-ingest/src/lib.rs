pub mod pipeline;
pub mod config;
pub mod sources;
pub mod sinks;
pub mod table;
pub mod transform;
pub mod vintage;
pub mod observability;
pub mod metrics_textfile;

pub use pipeline::{Envelope, GeneratorDatasetBuilder, PipelineError, Sink, TabularSource};
