//! Prometheus metrics for a batch run, dumped to a textfile when the run
//! ends (for node_exporter's textfile collector).

use std::{fs, path::Path};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static PROM_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global recorder. Later calls are no-ops.
pub fn init() -> anyhow::Result<()> {
    if PROM_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROM_HANDLE.set(handle);
    Ok(())
}

pub fn write(path: &Path) -> anyhow::Result<()> {
    let handle = PROM_HANDLE
        .get()
        .ok_or_else(|| anyhow::anyhow!("Prometheus recorder not initialized"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, handle.render())?;
    tracing::info!(path = %path.display(), "metrics textfile written");
    Ok(())
}
