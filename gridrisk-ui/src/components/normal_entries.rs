//! Togglable table of consumers classed as normal.

use super::record_table::RecordTable;
use super::section_header::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use gridrisk_core::table::normal_rows;

/// Normal entries, highest risk first, hidden until the viewer opts in.
///
/// The toggle is local to this component and is not reset when a new
/// analysis arrives.
#[component]
pub fn NormalEntries() -> Element {
    let state = use_context::<AppState>();
    let mut show = use_signal(|| false);

    let rows = match &state.session.read().result {
        Some(result) if show() => normal_rows(result),
        Some(_) => Vec::new(),
        None => return rsx! {},
    };
    let label = if show() { "Hide all other entries" } else { "Show all other entries" };

    rsx! {
        div {
            style: "margin: 20px 0;",
            button {
                style: "padding: 6px 12px; border: 1px solid #34495e; background: white; color: #34495e; border-radius: 4px; cursor: pointer;",
                onclick: move |_| show.set(!show()),
                "{label}"
            }
            if show() {
                div {
                    style: "margin-top: 12px;",
                    SectionHeader {
                        title: format!("Normal Entries ({})", rows.len()),
                        caption: "Sorted by risk so near-threshold consumers come first".to_string(),
                    }
                    RecordTable {
                        rows,
                        empty_message: "No normal entries in this analysis".to_string(),
                    }
                }
            }
        }
    }
}
