//! Per-year layout of the published generator inventories.
//!
//! Everything that differs between reporting years lives here so the
//! pipelines themselves never branch on the year.

use crate::{
    pipeline::PipelineError,
    table::RawTable,
    transform::{fixups, HeaderStyle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSpec {
    pub name: &'static str,
    pub header_skip_rows: usize,
}

/// Which member of the downloaded archive holds the generator workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookEntry {
    /// First member whose name contains the fragment.
    Containing(&'static str),
    Named(&'static str),
}

impl WorkbookEntry {
    pub fn resolve<'a>(&self, mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
        match self {
            Self::Containing(fragment) => names.find(|n| n.contains(fragment)),
            Self::Named(name) => names.find(|n| n == name),
        }
    }
}

pub type StructuralFixup = fn(&mut RawTable) -> Result<(), PipelineError>;

#[derive(Debug, Clone, Copy)]
pub struct Vintage {
    pub year: u16,
    pub archive_url: &'static str,
    pub workbook: WorkbookEntry,
    pub operating: SheetSpec,
    pub operating_headers: HeaderStyle,
    pub proposed: SheetSpec,
    pub retired: SheetSpec,
    pub retired_fixup: Option<StructuralFixup>,
}

const fn sheet(name: &'static str, header_skip_rows: usize) -> SheetSpec {
    SheetSpec {
        name,
        header_skip_rows,
    }
}

pub const VINTAGES: [Vintage; 3] = [
    Vintage {
        year: 2000,
        archive_url: "https://www.eia.gov/electricity/data/eia860/eia860a/eia860a2000.zip",
        workbook: WorkbookEntry::Named("ExistingGenerators2000.xls"),
        operating: sheet("Exist", 0),
        operating_headers: HeaderStyle::Snake,
        proposed: sheet("Proposed", 1),
        retired: sheet("Existing Generators", 0),
        retired_fixup: Some(fixups::pre_2001_retired),
    },
    Vintage {
        year: 2010,
        archive_url: "https://www.eia.gov/electricity/data/eia860/archive/xls/eia8602010.zip",
        workbook: WorkbookEntry::Containing("Generator"),
        operating: sheet("Exist", 0),
        operating_headers: HeaderStyle::LowercaseOnly,
        proposed: sheet("Proposed", 1),
        retired: sheet("Retired and Canceled", 1),
        retired_fixup: None,
    },
    Vintage {
        year: 2018,
        archive_url: "https://www.eia.gov/electricity/data/eia860/xls/eia8602018.zip",
        workbook: WorkbookEntry::Containing("Generator"),
        operating: sheet("Operable", 1),
        operating_headers: HeaderStyle::Snake,
        proposed: sheet("Proposed", 1),
        retired: sheet("Retired and Canceled", 1),
        retired_fixup: None,
    },
];

impl Vintage {
    pub fn for_year(year: u16) -> Result<&'static Vintage, PipelineError> {
        VINTAGES
            .iter()
            .find(|v| v.year == year)
            .ok_or(PipelineError::UnsupportedYear(year))
    }

    pub fn supported_years() -> impl Iterator<Item = u16> {
        VINTAGES.iter().map(|v| v.year)
    }

    /// File name of the archive as published, e.g. `eia8602018.zip`.
    pub fn archive_file_name(&self) -> &'static str {
        self.archive_url.rsplit('/').next().unwrap_or(self.archive_url)
    }
}
