//! Marker lifecycle: the set of pins currently on the map surface.
//!
//! Every [`MarkerLayer::render`] tears down all live markers before building
//! the new set, so the map always shows exactly the latest ranked view.

use super::readiness::ReadinessState;
use super::{LatLng, MapProvider, MarkerColor, MarkerConfig, PopupContent};
use crate::ranking::RankedConsumerView;
use crate::record::RiskClass;
use log::{info, warn};

/// Stroke width used when none is configured.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Pin color for a risk class, or `None` when the class is never pinned.
///
/// Theft and critical share red.
pub fn marker_color(class: &RiskClass) -> Option<MarkerColor> {
    match class {
        RiskClass::Theft | RiskClass::Critical => Some(MarkerColor::Red),
        RiskClass::Mild => Some(MarkerColor::Yellow),
        RiskClass::Normal | RiskClass::Other(_) => None,
    }
}

/// One pin on the map.
#[derive(Debug)]
pub struct MarkerEntry<M> {
    pub consumer_id: String,
    pub position: LatLng,
    pub color: MarkerColor,
    pub popup: PopupContent,
    handle: M,
}

/// What a render pass did with each record of the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub placed: usize,
    /// Records whose class is not pinned (normal or unrecognized).
    pub skipped_class: usize,
    /// Records without a usable coordinate pair.
    pub skipped_coordinates: usize,
    /// Markers the provider refused to build.
    pub failed: usize,
}

/// Owns every marker it puts on the map and removes them on rebuild and drop.
pub struct MarkerLayer<P: MapProvider> {
    provider: P,
    stroke_width: u32,
    entries: Vec<MarkerEntry<P::Marker>>,
}

impl<P: MapProvider> MarkerLayer<P> {
    pub fn new(provider: P, stroke_width: u32) -> Self {
        Self {
            provider,
            stroke_width,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[MarkerEntry<P::Marker>] {
        &self.entries
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Replace the markers with one pin per actionable record of `view`.
    ///
    /// Returns `None` without touching anything when the map is not Ready.
    pub fn render(
        &mut self,
        readiness: &ReadinessState<P::Surface>,
        view: &RankedConsumerView<'_>,
    ) -> Option<RenderReport> {
        let surface = readiness.surface()?;
        self.clear();

        let mut report = RenderReport::default();
        for record in view.iter() {
            let Some(color) = marker_color(&record.risk_class) else {
                report.skipped_class += 1;
                continue;
            };
            let Some((lat, lng)) = record.coordinates() else {
                report.skipped_coordinates += 1;
                continue;
            };

            let position = LatLng { lat, lng };
            let config = MarkerConfig {
                position,
                color,
                stroke_width: self.stroke_width,
                label: record.consumer_id.clone(),
            };
            let handle = match self.provider.create_marker(surface, &config) {
                Ok(handle) => handle,
                Err(e) => {
                    warn!("Skipping marker for {}: {}", record.consumer_id, e);
                    report.failed += 1;
                    continue;
                }
            };

            let popup = PopupContent {
                consumer_id: record.consumer_id.clone(),
                risk_percent: record.risk_percent(),
            };
            if let Err(e) = self.provider.bind_popup(&handle, &popup) {
                warn!("Marker for {} has no popup: {}", record.consumer_id, e);
            }

            self.entries.push(MarkerEntry {
                consumer_id: record.consumer_id.clone(),
                position,
                color,
                popup,
                handle,
            });
            report.placed += 1;
        }

        info!(
            "Rendered {} markers ({} not pinned by class, {} without coordinates, {} failed)",
            report.placed, report.skipped_class, report.skipped_coordinates, report.failed
        );
        Some(report)
    }

    /// Detach every owned marker. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        for entry in self.entries.drain(..) {
            self.provider.remove_marker(entry.handle);
        }
        removed
    }
}

impl<P: MapProvider> Drop for MarkerLayer<P> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::fake::FakeMap;
    use crate::ranking::rank;
    use crate::record::ConsumerRecord;

    fn record(id: &str, score: f64, class: &str, lat: Option<f64>, lng: Option<f64>) -> ConsumerRecord {
        ConsumerRecord {
            consumer_id: id.to_string(),
            transformer_id: None,
            latitude: lat,
            longitude: lng,
            aggregate_risk_score: score,
            risk_class: RiskClass::parse(class),
            risk_percentile: None,
            inspection_flag: None,
        }
    }

    fn pinned(map: &FakeMap) -> Vec<(String, MarkerColor)> {
        map.live
            .borrow()
            .iter()
            .map(|(_, c)| (c.label.clone(), c.color))
            .collect()
    }

    #[test]
    fn colors_follow_risk_class() {
        assert_eq!(marker_color(&RiskClass::Theft), Some(MarkerColor::Red));
        assert_eq!(marker_color(&RiskClass::Critical), Some(MarkerColor::Red));
        assert_eq!(marker_color(&RiskClass::Mild), Some(MarkerColor::Yellow));
        assert_eq!(marker_color(&RiskClass::Normal), None);
        assert_eq!(marker_color(&RiskClass::parse("high")), None);
    }

    #[test]
    fn not_ready_is_a_no_op() {
        let map = FakeMap::ready();
        let input = vec![record("C1", 0.9, "theft", Some(28.6), Some(77.2))];
        let mut layer = MarkerLayer::new(&map, 2);

        assert_eq!(layer.render(&ReadinessState::Unchecked, &rank(&input)), None);
        assert_eq!(layer.render(&ReadinessState::Polling { attempts: 4 }, &rank(&input)), None);
        assert!(map.live.borrow().is_empty());
    }

    #[test]
    fn pins_only_actionable_records_with_coordinates() {
        let map = FakeMap::ready();
        let input = vec![
            record("N1", 0.1, "normal", Some(28.6), Some(77.2)),
            record("M1", 0.4, "mild", Some(19.0), Some(72.8)),
            record("T1", 0.9, "theft", Some(12.9), Some(77.5)),
            record("K1", 0.8, "critical", Some(13.0), Some(80.2)),
            record("X1", 0.7, "high", Some(22.5), Some(88.3)),
            record("B1", 0.95, "theft", None, Some(77.2)),
        ];
        let mut layer = MarkerLayer::new(&map, 3);

        let report = layer.render(&ReadinessState::Ready(1), &rank(&input)).unwrap();
        assert_eq!(
            report,
            RenderReport {
                placed: 3,
                skipped_class: 2,
                skipped_coordinates: 1,
                failed: 0,
            }
        );
        assert_eq!(
            pinned(&map),
            vec![
                ("M1".to_string(), MarkerColor::Yellow),
                ("T1".to_string(), MarkerColor::Red),
                ("K1".to_string(), MarkerColor::Red),
            ]
        );
        assert!(map.live.borrow().iter().all(|(_, c)| c.stroke_width == 3));
    }

    #[test]
    fn invalid_coordinates_are_skipped_without_panicking() {
        let map = FakeMap::ready();
        let raw = serde_json::json!({
            "consumer_id": "C5", "latitude": "N/A", "longitude": 77.2, "risk_class": "theft",
        });
        let input = vec![ConsumerRecord::from_value(&raw).unwrap()];
        let mut layer = MarkerLayer::new(&map, 2);

        let report = layer.render(&ReadinessState::Ready(1), &rank(&input)).unwrap();
        assert_eq!(report.skipped_coordinates, 1);
        assert!(layer.entries().is_empty());
    }

    #[test]
    fn popup_shows_id_and_rounded_percentage() {
        let map = FakeMap::ready();
        let input = vec![record("C1", 0.846, "critical", Some(28.6), Some(77.2))];
        let mut layer = MarkerLayer::new(&map, 2);
        layer.render(&ReadinessState::Ready(1), &rank(&input));

        let popups = map.popups.borrow();
        assert_eq!(popups.len(), 1);
        assert_eq!(popups[0].1.consumer_id, "C1");
        assert_eq!(popups[0].1.risk_percent, 85);
        assert_eq!(popups[0].1.text(), "Consumer C1: 85% risk");
    }

    #[test]
    fn each_render_replaces_the_previous_markers() {
        let map = FakeMap::ready();
        let first = vec![
            record("A", 0.9, "theft", Some(28.6), Some(77.2)),
            record("B", 0.5, "mild", Some(19.0), Some(72.8)),
        ];
        let second = vec![record("C", 0.8, "critical", Some(13.0), Some(80.2))];
        let mut layer = MarkerLayer::new(&map, 2);

        layer.render(&ReadinessState::Ready(1), &rank(&first));
        assert_eq!(map.live_labels(), vec!["A", "B"]);

        layer.render(&ReadinessState::Ready(1), &rank(&second));
        assert_eq!(map.live_labels(), vec!["C"]);
        assert_eq!(layer.entries().len(), 1);

        layer.render(&ReadinessState::Ready(1), &rank(&[]));
        assert!(map.live.borrow().is_empty());
    }

    #[test]
    fn provider_failure_skips_only_that_marker() {
        let map = FakeMap::ready();
        *map.fail_marker_label.borrow_mut() = Some("B".to_string());
        let input = vec![
            record("A", 0.9, "theft", Some(28.6), Some(77.2)),
            record("B", 0.5, "mild", Some(19.0), Some(72.8)),
        ];
        let mut layer = MarkerLayer::new(&map, 2);

        let report = layer.render(&ReadinessState::Ready(1), &rank(&input)).unwrap();
        assert_eq!(report.placed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(map.live_labels(), vec!["A"]);
    }

    #[test]
    fn dropping_the_layer_detaches_all_markers() {
        let map = FakeMap::ready();
        let input = vec![
            record("A", 0.9, "theft", Some(28.6), Some(77.2)),
            record("B", 0.5, "mild", Some(19.0), Some(72.8)),
        ];
        {
            let mut layer = MarkerLayer::new(&map, 2);
            layer.render(&ReadinessState::Ready(1), &rank(&input));
            assert_eq!(map.live.borrow().len(), 2);
        }
        assert!(map.live.borrow().is_empty());
    }

    #[test]
    fn clear_reports_removed_count() {
        let map = FakeMap::ready();
        let input = vec![record("A", 0.9, "theft", Some(28.6), Some(77.2))];
        let mut layer = MarkerLayer::new(&map, 2);
        layer.render(&ReadinessState::Ready(1), &rank(&input));
        assert_eq!(layer.clear(), 1);
        assert_eq!(layer.clear(), 0);
    }
}
