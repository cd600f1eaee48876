//! Dashboard configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::map::markers::DEFAULT_STROKE_WIDTH;
use crate::map::readiness::PollConfig;
use crate::map::SurfaceConfig;
use serde::{Deserialize, Serialize};

/// Settings for the map surface, markers and readiness polling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Name of the global the mapping library installs on `window`.
    pub global_handle: String,
    pub surface: SurfaceConfig,
    pub stroke_width: u32,
    pub poll: PollConfig,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            global_handle: "mappls".to_string(),
            surface: SurfaceConfig::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            poll: PollConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the analysis service.
    pub backend_url: String,
    pub analyze_path: String,
    /// Native clients only; browsers apply their own limits.
    pub request_timeout_secs: u64,
    pub map: MapSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            analyze_path: "/api/v1/analyze".to_string(),
            request_timeout_secs: 120,
            map: MapSettings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            self.analyze_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.map.poll.interval_ms, 500);
        assert_eq!(config.analyze_url(), "http://localhost:8000/api/v1/analyze");
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = DashboardConfig::from_json_str(
            r#"{"backend_url": "https://grid.example/", "map": {"poll": {"max_attempts": null}}}"#,
        )
        .unwrap();
        assert_eq!(config.analyze_url(), "https://grid.example/api/v1/analyze");
        assert_eq!(config.map.poll.max_attempts, None);
        assert_eq!(config.map.poll.interval_ms, 500);
        assert_eq!(config.map.global_handle, "mappls");
    }
}
