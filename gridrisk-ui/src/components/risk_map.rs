//! Risk map: waits for the map library, then keeps one pin per actionable consumer.

use super::error_display::{ErrorDisplay, Severity};
use super::section_header::SectionHeader;
use crate::js_bridge;
use crate::map_provider::JsMapProvider;
use crate::state::AppState;
use dioxus::prelude::*;
use gridrisk_core::config::MapSettings;
use gridrisk_core::map::markers::MarkerLayer;
use gridrisk_core::map::readiness::{ReadinessMonitor, ReadinessState};
use gridrisk_core::rank;

/// DOM id the map library renders into.
pub const MAP_CONTAINER_ID: &str = "grid-risk-map";

#[component]
pub fn RiskMap(settings: MapSettings) -> Element {
    let state = use_context::<AppState>();
    let provider = use_hook(|| JsMapProvider::new(&settings.global_handle, MAP_CONTAINER_ID));
    let stroke_width = settings.stroke_width;
    let mut layer = use_signal({
        let provider = provider.clone();
        move || MarkerLayer::new(provider, stroke_width)
    });
    let mut pinned = use_signal(|| 0usize);

    // Start the readiness monitor once the container is in the DOM
    use_effect({
        let settings = settings.clone();
        move || {
            let provider = provider.clone();
            let poll = settings.poll;
            let surface = settings.surface.clone();
            let mut readiness = state.readiness;
            spawn(async move {
                js_bridge::load_map_scripts();
                let mut monitor = ReadinessMonitor::new(poll, surface);
                monitor
                    .run(&provider, gloo_timers::future::sleep, move |s| {
                        readiness.set(s.clone())
                    })
                    .await;
            });
        }
    });

    // Rebuild pins whenever the surface or the analysis changes
    use_effect(move || {
        let readiness = state.readiness.read();
        let session = state.session.read();
        let mut markers = layer.write();
        match &session.result {
            Some(result) => {
                let view = rank(result.ranking_source());
                if let Some(report) = markers.render(&*readiness, &view) {
                    pinned.set(report.placed);
                }
            }
            None => {
                markers.clear();
                pinned.set(0);
            }
        }
    });

    use_drop(move || {
        if let Ok(mut markers) = layer.try_write() {
            markers.clear();
        }
    });

    let status = match &*state.readiness.read() {
        ReadinessState::Ready(_) => None,
        ReadinessState::Failed(e) => Some(rsx! {
            ErrorDisplay { message: format!("Map unavailable: {}", e) }
        }),
        ReadinessState::TimedOut { attempts } => Some(rsx! {
            ErrorDisplay {
                message: format!("Map library did not load after {} checks", attempts),
                severity: Severity::Warning,
                hint: "Tables are unaffected. Reload the page to try loading the map again.".to_string(),
            }
        }),
        ReadinessState::Unchecked | ReadinessState::Polling { .. } => Some(rsx! {
            div {
                style: "padding: 8px; color: #666; font-size: 13px;",
                "Waiting for map library..."
            }
        }),
    };
    let caption = format!("{} consumer(s) pinned", pinned());

    rsx! {
        div {
            style: "margin: 20px 0;",
            SectionHeader {
                title: "Risk Map".to_string(),
                caption,
            }
            {status}
            div {
                id: MAP_CONTAINER_ID,
                style: "width: 100%; height: 520px; border: 1px solid #dee2e6; border-radius: 4px;",
            }
        }
    }
}
