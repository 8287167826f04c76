use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GeneratorRecord, ProposedRecord, RetiredRecord};

/// Which classified view of a year's inventory to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Operating,
    Proposed,
    Retired,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [Self::Operating, Self::Proposed, Self::Retired];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operating => "operating",
            Self::Proposed => "proposed",
            Self::Retired => "retired",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Operating(Vec<GeneratorRecord>),
    Proposed(Vec<ProposedRecord>),
    Retired(Vec<RetiredRecord>),
}

impl Dataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Operating(_) => DatasetKind::Operating,
            Self::Proposed(_) => DatasetKind::Proposed,
            Self::Retired(_) => DatasetKind::Retired,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Operating(rows) => rows.len(),
            Self::Proposed(rows) => rows.len(),
            Self::Retired(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Operating(_) => &GeneratorRecord::COLUMNS,
            Self::Proposed(_) => &ProposedRecord::COLUMNS,
            Self::Retired(_) => &RetiredRecord::COLUMNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_kind_round_trips_through_config_names() {
        let kinds: Vec<DatasetKind> =
            serde_json::from_str(r#"["operating", "proposed", "retired"]"#).unwrap();
        assert_eq!(kinds, DatasetKind::ALL.to_vec());
        assert_eq!(DatasetKind::Retired.to_string(), "retired");
    }

    #[test]
    fn empty_dataset_reports_its_kind() {
        let ds = Dataset::Proposed(Vec::new());
        assert_eq!(ds.kind(), DatasetKind::Proposed);
        assert!(ds.is_empty());
    }
}
