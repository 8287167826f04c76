pub mod archive;
pub mod csv_dir;
pub mod memory;

pub use archive::ArchiveSource;
pub use csv_dir::CsvDirSource;
pub use memory::InMemorySource;
