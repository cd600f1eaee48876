//! Upload a dataset and report on the returned analysis.

use crate::report::{self, ReportOptions};
use anyhow::Context;
use gridrisk_core::client::AnalysisClient;
use gridrisk_core::config::DashboardConfig;
use log::info;
use std::path::Path;

/// Load the dashboard config from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    DashboardConfig::from_json_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))
}

pub async fn run_analyze(
    file: &Path,
    config_path: Option<&Path>,
    backend_url: Option<String>,
    show_normal: bool,
    export_csv: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(url) = backend_url {
        config.backend_url = url;
    }

    let contents =
        std::fs::read(file).with_context(|| format!("reading dataset {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());

    let client = AnalysisClient::new(&config)?;
    info!("Analyzing {} via {}", file.display(), client.endpoint());
    let result = client.analyze(file_name, contents).await?;

    report::publish(
        &result,
        &file.display().to_string(),
        &ReportOptions {
            show_normal,
            stroke_width: config.map.stroke_width,
        },
        export_csv,
    )
}
