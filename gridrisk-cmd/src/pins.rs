//! Native stand-in for the map: records which consumers would be pinned.

use gridrisk_core::map::markers::{MarkerLayer, RenderReport};
use gridrisk_core::map::readiness::{PollConfig, ReadinessMonitor};
use gridrisk_core::map::{
    LatLng, MapProvider, MarkerColor, MarkerConfig, PopupContent, SurfaceConfig,
};
use gridrisk_core::{MapError, RankedConsumerView};

/// Provider with nothing to draw on. It is always available and accepts
/// every marker, so the marker layer's own filtering decides the pins.
#[derive(Debug, Default)]
pub struct PinBoard;

impl MapProvider for PinBoard {
    type Surface = ();
    type Marker = ();

    fn is_available(&self) -> bool {
        true
    }

    fn create_surface(&self, _config: &SurfaceConfig) -> Result<(), MapError> {
        Ok(())
    }

    fn create_marker(&self, _surface: &(), _config: &MarkerConfig) -> Result<(), MapError> {
        Ok(())
    }

    fn bind_popup(&self, _marker: &(), _content: &PopupContent) -> Result<(), MapError> {
        Ok(())
    }

    fn remove_marker(&self, _marker: ()) {}
}

/// A pin as it would appear on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub consumer_id: String,
    pub position: LatLng,
    pub color: MarkerColor,
    pub popup: String,
}

/// Run `view` through the marker layer and return the resulting pins.
pub fn pin_consumers(
    view: &RankedConsumerView<'_>,
    stroke_width: u32,
) -> (Vec<Pin>, RenderReport) {
    let board = PinBoard;
    let mut monitor = ReadinessMonitor::new(PollConfig::default(), SurfaceConfig::default());
    monitor.poll(&board);

    let mut layer = MarkerLayer::new(&board, stroke_width);
    let report = layer.render(monitor.state(), view).unwrap_or_default();
    let pins = layer
        .entries()
        .iter()
        .map(|entry| Pin {
            consumer_id: entry.consumer_id.clone(),
            position: entry.position,
            color: entry.color,
            popup: entry.popup.text(),
        })
        .collect();
    (pins, report)
}
