//! [`MapProvider`] backed by the browser's map library global.

use crate::js_bridge::{self, js_string};
use gridrisk_core::map::{MapProvider, MarkerConfig, PopupContent, SurfaceConfig};
use gridrisk_core::MapError;

/// Registry id of a map surface created by the glue script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle(u32);

/// Registry id of a marker created by the glue script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHandle(u32);

/// Talks to `window[global_handle]` through `window.__gridRiskMap`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsMapProvider {
    global_handle: String,
    container_id: String,
}

impl JsMapProvider {
    pub fn new(global_handle: &str, container_id: &str) -> Self {
        Self {
            global_handle: global_handle.to_string(),
            container_id: container_id.to_string(),
        }
    }

    fn handle(&self) -> String {
        js_string(&self.global_handle)
    }
}

impl MapProvider for JsMapProvider {
    type Surface = SurfaceHandle;
    type Marker = MarkerHandle;

    fn is_available(&self) -> bool {
        js_bridge::eval_bool(&format!(
            "typeof window.__gridRiskMap !== 'undefined' && window.__gridRiskMap.available({})",
            self.handle()
        ))
    }

    fn create_surface(&self, config: &SurfaceConfig) -> Result<SurfaceHandle, MapError> {
        let config_json = serde_json::to_string(config)
            .map_err(|e| MapError::SurfaceConstruction(e.to_string()))?;
        js_bridge::eval_id(&format!(
            "window.__gridRiskMap.createSurface({}, {}, {})",
            self.handle(),
            js_string(&self.container_id),
            js_string(&config_json)
        ))
        .map(SurfaceHandle)
        .map_err(MapError::SurfaceConstruction)
    }

    fn create_marker(
        &self,
        surface: &SurfaceHandle,
        config: &MarkerConfig,
    ) -> Result<MarkerHandle, MapError> {
        let config_json = serde_json::to_string(config)
            .map_err(|e| MapError::MarkerConstruction(e.to_string()))?;
        js_bridge::eval_id(&format!(
            "window.__gridRiskMap.createMarker({}, {}, {})",
            self.handle(),
            surface.0,
            js_string(&config_json)
        ))
        .map(MarkerHandle)
        .map_err(MapError::MarkerConstruction)
    }

    fn bind_popup(&self, marker: &MarkerHandle, content: &PopupContent) -> Result<(), MapError> {
        js_bridge::eval(&format!(
            "window.__gridRiskMap.bindPopup({}, {}, {})",
            self.handle(),
            marker.0,
            js_string(&content.text())
        ))
        .map(|_| ())
        .map_err(MapError::PopupConstruction)
    }

    fn remove_marker(&self, marker: MarkerHandle) {
        js_bridge::call_js(&format!("window.__gridRiskMap.removeMarker({});", marker.0));
    }
}
