//! Abstraction over the externally loaded mapping library.
//!
//! The dashboard never touches the library's global directly. It goes
//! through a [`MapProvider`], which the WASM app implements on top of the
//! JS bridge and tests implement with an in-memory fake.

pub mod markers;
pub mod readiness;

use crate::error::MapError;
use serde::{Deserialize, Serialize, Serializer};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangle the map viewport may not leave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

/// Options for constructing the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub style_theme: String,
    pub bounding_restriction: Option<Bounds>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            center: LatLng { lat: 22.9734, lng: 78.6569 },
            zoom: 5,
            style_theme: "standard-day".to_string(),
            bounding_restriction: Some(Bounds {
                south_west: LatLng { lat: 6.5, lng: 68.1 },
                north_east: LatLng { lat: 35.7, lng: 97.4 },
            }),
        }
    }
}

/// Pin colors. The taxonomy is fixed; see [`markers::marker_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Red,
    Yellow,
}

impl MarkerColor {
    pub fn hex(&self) -> &'static str {
        match self {
            MarkerColor::Red => "#E53935",
            MarkerColor::Yellow => "#FDD835",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Yellow => "yellow",
        }
    }
}

impl Serialize for MarkerColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// Options for one marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    pub position: LatLng,
    pub color: MarkerColor,
    pub stroke_width: u32,
    pub label: String,
}

/// Text shown when a marker is clicked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupContent {
    pub consumer_id: String,
    /// Aggregate risk as a whole percentage.
    pub risk_percent: i64,
}

impl PopupContent {
    pub fn text(&self) -> String {
        format!("Consumer {}: {}% risk", self.consumer_id, self.risk_percent)
    }
}

/// Capability exposed by the mapping library once it has loaded.
///
/// `Surface` and `Marker` are opaque handles owned by the caller.
pub trait MapProvider {
    type Surface;
    type Marker;

    /// Whether the library's global handle is present and usable.
    fn is_available(&self) -> bool;

    fn create_surface(&self, config: &SurfaceConfig) -> Result<Self::Surface, MapError>;

    fn create_marker(
        &self,
        surface: &Self::Surface,
        config: &MarkerConfig,
    ) -> Result<Self::Marker, MapError>;

    /// Attach a popup that opens when `marker` is clicked.
    fn bind_popup(&self, marker: &Self::Marker, content: &PopupContent) -> Result<(), MapError>;

    /// Detach `marker` from its surface and release it.
    fn remove_marker(&self, marker: Self::Marker);
}

impl<P: MapProvider + ?Sized> MapProvider for &P {
    type Surface = P::Surface;
    type Marker = P::Marker;

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn create_surface(&self, config: &SurfaceConfig) -> Result<Self::Surface, MapError> {
        (**self).create_surface(config)
    }

    fn create_marker(
        &self,
        surface: &Self::Surface,
        config: &MarkerConfig,
    ) -> Result<Self::Marker, MapError> {
        (**self).create_marker(surface, config)
    }

    fn bind_popup(&self, marker: &Self::Marker, content: &PopupContent) -> Result<(), MapError> {
        (**self).bind_popup(marker, content)
    }

    fn remove_marker(&self, marker: Self::Marker) {
        (**self).remove_marker(marker)
    }
}
