pub mod dataset;
pub mod fuel;
pub mod generator;
pub mod proposed;
pub mod retired;

pub use dataset::{Dataset, DatasetKind};
pub use fuel::{classify, EnergySource, FuelCategory, ENERGY_SOURCE_MAPPING};
pub use generator::GeneratorRecord;
pub use proposed::ProposedRecord;
pub use retired::RetiredRecord;
