use generator_model::domain::DatasetKind;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::vintage::Vintage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Archive,
    CsvDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    Csv,
    Ndjson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    pub kind: SinkKind,
    pub output_dir: PathBuf,
}

fn all_datasets() -> Vec<DatasetKind> {
    DatasetKind::ALL.to_vec()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub years: Vec<u16>,
    #[serde(default = "all_datasets")]
    pub datasets: Vec<DatasetKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub textfile_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub sink: SinkConfig,
    pub run: RunConfig,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var("GENERATORS_CONFIG").unwrap_or_else(|_| "generators-config.toml".to_string());
        let contents = fs::read_to_string(&path)?;
        let cfg: AppConfig = toml::from_str(&contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject work that would fail anyway before any sheet is read.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.run.years.is_empty() {
            anyhow::bail!("run.years must list at least one reporting year");
        }
        if self.run.datasets.is_empty() {
            anyhow::bail!("run.datasets must not be empty");
        }
        for &year in &self.run.years {
            Vintage::for_year(year)?;
        }
        Ok(())
    }

    /// Every (year, dataset) pair to build, in config order.
    pub fn jobs(&self) -> Vec<(u16, DatasetKind)> {
        self.run
            .years
            .iter()
            .flat_map(|&year| self.run.datasets.iter().map(move |&kind| (year, kind)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
        [source]
        kind = "archive"
        path = "data/eia860"

        [sink]
        kind = "csv"
        output_dir = "out"

        [run]
        years = [2000, 2018]
    "#;

    #[test]
    fn parses_and_defaults_to_every_dataset() {
        let cfg: AppConfig = toml::from_str(EXAMPLE).unwrap();
        cfg.validate().unwrap();

        assert_eq!(cfg.source.kind, SourceKind::Archive);
        assert_eq!(cfg.sink.kind, SinkKind::Csv);
        assert!(cfg.metrics.is_none());
        assert_eq!(cfg.jobs().len(), 6);
        assert_eq!(cfg.jobs()[0], (2000, DatasetKind::Operating));
    }

    #[test]
    fn unsupported_year_fails_validation() {
        let cfg: AppConfig = toml::from_str(&EXAMPLE.replace("2000, 2018", "2018, 2019")).unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("2019"));
    }

    #[test]
    fn explicit_dataset_list_and_metrics() {
        let toml_str = format!(
            "{EXAMPLE}\ndatasets = [\"retired\"]\n\n[metrics]\ntextfile_path = \"out/generators.prom\"\n"
        );
        let cfg: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(cfg.run.datasets, vec![DatasetKind::Retired]);
        assert_eq!(
            cfg.metrics.unwrap().textfile_path,
            PathBuf::from("out/generators.prom")
        );
    }
}
