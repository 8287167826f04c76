use std::{
    fs,
    io::{Cursor, Read},
    path::PathBuf,
};

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use zip::ZipArchive;

use crate::{
    pipeline::{PipelineError, TabularSource},
    table::{Cell, RawTable},
    vintage::Vintage,
};

/// Reads sheets straight out of the zip archives as published, kept under
/// one directory with their original file names (`eia8602018.zip`, ...).
pub struct ArchiveSource {
    root: PathBuf,
}

impl ArchiveSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn archive_path(&self, vintage: &Vintage) -> PathBuf {
        self.root.join(vintage.archive_file_name())
    }

    fn read_workbook(&self, vintage: &Vintage) -> Result<Vec<u8>, PipelineError> {
        let path = self.archive_path(vintage);
        let bytes = fs::read(&path).map_err(|e| {
            PipelineError::Source(format!("failed to read archive {}: {e}", path.display()))
        })?;
        let digest = blake3::hash(&bytes);
        tracing::debug!(path = %path.display(), blake3 = %digest.to_hex(), "opened generator archive");

        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| PipelineError::Source(format!("invalid archive {}: {e}", path.display())))?;
        let entry = vintage
            .workbook
            .resolve(archive.file_names())
            .map(str::to_string)
            .ok_or_else(|| {
                PipelineError::Source(format!(
                    "no generator workbook ({:?}) in {}",
                    vintage.workbook,
                    path.display()
                ))
            })?;

        let mut workbook = Vec::new();
        archive
            .by_name(&entry)
            .map_err(|e| PipelineError::Source(format!("failed to open {entry}: {e}")))?
            .read_to_end(&mut workbook)
            .map_err(|e| PipelineError::Source(format!("failed to extract {entry}: {e}")))?;
        Ok(workbook)
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Missing,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

impl TabularSource for ArchiveSource {
    fn open_sheet(
        &self,
        year: u16,
        sheet_name: &str,
        header_skip_rows: usize,
    ) -> Result<RawTable, PipelineError> {
        let vintage = Vintage::for_year(year)?;
        let workbook_bytes = self.read_workbook(vintage)?;
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(workbook_bytes))
            .map_err(|e| PipelineError::Source(format!("failed to open workbook: {e}")))?;
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| PipelineError::Source(format!("failed to read sheet '{sheet_name}': {e}")))?;

        // The range starts at the first used row, which may sit below row 0.
        let first_row = range.start().map_or(0, |(row, _)| row as usize);
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();

        RawTable::from_rows(sheet_name, rows, header_skip_rows.saturating_sub(first_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    #[test]
    fn archive_without_generator_workbook_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = fs::File::create(dir.path().join("eia8602018.zip")).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options: FileOptions<'_, ()> = FileOptions::default();
        zip.start_file("2___Plant_Y2018.xlsx", options).unwrap();
        zip.write_all(b"not a workbook").unwrap();
        zip.finish().unwrap();

        let source = ArchiveSource::new(dir.path());
        let err = source.open_sheet(2018, "Operable", 1).unwrap_err();
        assert!(matches!(err, PipelineError::Source(msg) if msg.contains("no generator workbook")));
    }

    #[test]
    fn missing_archive_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ArchiveSource::new(dir.path());
        assert!(matches!(source.open_sheet(2010, "Exist", 0), Err(PipelineError::Source(_))));
    }

    #[test]
    fn unsupported_year_is_rejected_before_io() {
        let source = ArchiveSource::new("/nonexistent");
        assert!(matches!(
            source.open_sheet(1999, "Exist", 0),
            Err(PipelineError::UnsupportedYear(1999))
        ));
    }

    #[test]
    fn calamine_cells_map_to_table_cells() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Missing);
        assert_eq!(cell_from_data(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(cell_from_data(&Data::String("OP".into())), Cell::text("OP"));
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::text("true"));
    }
}
