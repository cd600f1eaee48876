//! Headline metrics for one analysis.

use dioxus::prelude::*;
use gridrisk_core::table::summary_metrics;
use gridrisk_core::Summary;

/// One card per summary metric, values shown as reported.
#[component]
pub fn SummaryCards(summary: Summary) -> Element {
    let metrics = summary_metrics(&summary);

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
            for metric in metrics {
                div {
                    key: "{metric.label}",
                    style: "flex: 1 1 180px; padding: 12px 16px; background: white; border: 1px solid #E0E0E0; border-radius: 6px;",
                    div {
                        style: "font-size: 12px; color: #666; text-transform: uppercase;",
                        "{metric.label}"
                    }
                    div {
                        style: "font-size: 24px; font-weight: 600; color: #2c3e50;",
                        "{metric.value}"
                    }
                }
            }
        }
    }
}
