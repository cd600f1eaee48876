//! Anomalies table in backend order.

use super::record_table::RecordTable;
use super::section_header::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use gridrisk_core::table::anomaly_rows;

/// Lists the anomalies of the current analysis exactly as the backend ordered them.
#[component]
pub fn AnomalyTable() -> Element {
    let state = use_context::<AppState>();
    let rows = match &state.session.read().result {
        Some(result) => anomaly_rows(result),
        None => return rsx! {},
    };

    rsx! {
        div {
            style: "margin: 20px 0;",
            SectionHeader {
                title: format!("Anomalies ({})", rows.len()),
                caption: "Consumers flagged by the analysis service, in reported order".to_string(),
            }
            RecordTable {
                rows,
                empty_message: "No anomalies in this analysis".to_string(),
            }
        }
    }
}
