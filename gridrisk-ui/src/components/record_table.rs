//! Table of consumer rows shared by the anomalies and normal-entries views.

use dioxus::prelude::*;
use gridrisk_core::table::TableRow;

/// Text style for the risk class cell.
fn class_style(class: &str) -> &'static str {
    match class {
        "theft" | "critical" => "color: #C62828; font-weight: 600;",
        "mild" => "color: #F9A825; font-weight: 600;",
        "normal" => "color: #2E7D32;",
        _ => "color: #616161;",
    }
}

#[component]
pub fn RecordTable(rows: Vec<TableRow>, empty_message: String) -> Element {
    if rows.is_empty() {
        return rsx! {
            div {
                style: "text-align: center; padding: 20px; color: #666;",
                "{empty_message}"
            }
        };
    }

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
                thead {
                    tr {
                        style: "background: #34495e; color: white;",
                        th { style: "padding: 10px; text-align: left;", "Consumer" }
                        th { style: "padding: 10px; text-align: left;", "Transformer" }
                        th { style: "padding: 10px; text-align: left;", "Class" }
                        th { style: "padding: 10px; text-align: right;", "Risk" }
                        th { style: "padding: 10px; text-align: right;", "Percentile" }
                        th { style: "padding: 10px; text-align: center;", "Inspect" }
                        th { style: "padding: 10px; text-align: left;", "Location" }
                    }
                }
                tbody {
                    for (idx, row) in rows.iter().enumerate() {
                        {
                            let percentile = row
                                .risk_percentile
                                .map(|p| format!("{:.0}%", p * 100.0))
                                .unwrap_or_default();
                            let inspect = if row.inspect { "Yes" } else { "" };
                            let class_css = class_style(&row.risk_class);

                            rsx! {
                                tr {
                                    key: "{idx}-{row.consumer_id}",
                                    style: if idx % 2 == 0 { "background: #f8f9fa;" } else { "background: white;" },
                                    td { style: "padding: 8px; border-top: 1px solid #dee2e6;", "{row.consumer_id}" }
                                    td { style: "padding: 8px; border-top: 1px solid #dee2e6;", "{row.transformer_id}" }
                                    td { style: "padding: 8px; border-top: 1px solid #dee2e6; {class_css}", "{row.risk_class}" }
                                    td { style: "padding: 8px; text-align: right; border-top: 1px solid #dee2e6;", "{row.risk_percent}%" }
                                    td { style: "padding: 8px; text-align: right; border-top: 1px solid #dee2e6;", "{percentile}" }
                                    td { style: "padding: 8px; text-align: center; border-top: 1px solid #dee2e6;", "{inspect}" }
                                    td { style: "padding: 8px; border-top: 1px solid #dee2e6; color: #666;", "{row.location}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
