//! Per-transformer rollup of the ranked view.

use super::section_header::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use gridrisk_core::ranking::transformer_hotspots;
use gridrisk_core::rank;
use gridrisk_core::record::risk_percent;

/// How many rollup rows to show.
const MAX_HOTSPOTS: usize = 10;

#[component]
pub fn TransformerHotspots() -> Element {
    let state = use_context::<AppState>();
    let hotspots = match &state.session.read().result {
        Some(result) => {
            let mut hotspots = transformer_hotspots(&rank(result.ranking_source()));
            hotspots.truncate(MAX_HOTSPOTS);
            hotspots
        }
        None => return rsx! {},
    };

    if hotspots.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin: 20px 0;",
            SectionHeader {
                title: "Transformer Hotspots".to_string(),
                caption: "Transformers with the most consumers pinned on the map".to_string(),
            }
            table {
                style: "border-collapse: collapse; background: white; min-width: 420px;",
                thead {
                    tr {
                        style: "background: #34495e; color: white;",
                        th { style: "padding: 8px; text-align: left;", "Transformer" }
                        th { style: "padding: 8px; text-align: right;", "Consumers" }
                        th { style: "padding: 8px; text-align: right;", "Actionable" }
                        th { style: "padding: 8px; text-align: right;", "Peak Risk" }
                    }
                }
                tbody {
                    for hotspot in hotspots {
                        {
                            let peak = risk_percent(hotspot.peak_score);
                            rsx! {
                                tr {
                                    key: "{hotspot.transformer_id}",
                                    td { style: "padding: 6px 8px; border-top: 1px solid #dee2e6;", "{hotspot.transformer_id}" }
                                    td { style: "padding: 6px 8px; text-align: right; border-top: 1px solid #dee2e6;", "{hotspot.consumers}" }
                                    td { style: "padding: 6px 8px; text-align: right; border-top: 1px solid #dee2e6;", "{hotspot.actionable}" }
                                    td { style: "padding: 6px 8px; text-align: right; border-top: 1px solid #dee2e6;", "{peak}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
