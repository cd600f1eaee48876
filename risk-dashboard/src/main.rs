//! Grid Risk Dashboard
//!
//! Uploads a consumer dataset to the analysis service and presents the
//! result: headline summary, anomalies in backend order, transformer
//! hotspots, an optional table of normal entries and a map with one pin per
//! theft, critical or mild consumer.
//!
//! Data flow:
//! 1. The user picks a file; `AppState::begin_upload` clears the previous
//!    result and issues a request ticket.
//! 2. The file is posted to the service; the response is parsed into an
//!    `AnalysisResult`.
//! 3. `AppState::finish_upload` applies it only if no newer upload started
//!    in the meantime.
//! 4. Tables and the map react to `state.session`; the map also waits for
//!    the externally loaded library to become ready.

use dioxus::prelude::*;
use gridrisk_core::client::AnalysisClient;
use gridrisk_core::config::DashboardConfig;
use gridrisk_ui::components::{
    AnomalyTable, ErrorDisplay, LoadingSpinner, NormalEntries, RiskMap, SummaryCards,
    TransformerHotspots, UploadPanel,
};
use gridrisk_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("grid-risk-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(DashboardConfig::default);
    let client = use_hook(|| match AnalysisClient::new(&config) {
        Ok(client) => Some(client),
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            None
        }
    });

    let on_file = move |(file_name, contents): (String, Vec<u8>)| {
        let Some(client) = client.clone() else {
            state.session.write().error_msg =
                Some("The analysis service client could not be created".to_string());
            return;
        };
        let ticket = state.begin_upload(file_name.clone());
        spawn(async move {
            let outcome = client
                .analyze(file_name, contents)
                .await
                .map_err(|e| {
                    log::error!("Analysis failed: {}", e);
                    e.to_string()
                });
            state.finish_upload(ticket, outcome);
        });
    };

    let (uploading, error, summary) = {
        let session = state.session.read();
        (
            session.uploading,
            session.error_msg.clone(),
            session.result.as_ref().map(|r| r.summary.clone()),
        )
    };

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 20px; font-family: sans-serif; background: #f5f6f7;",
            h2 {
                style: "margin: 0 0 4px 0; color: #2c3e50;",
                "Grid Risk Dashboard"
            }
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #666;",
                "Upload a consumer dataset to detect theft and loss hotspots."
            }

            UploadPanel { on_file }

            if let Some(msg) = error {
                ErrorDisplay {
                    message: msg,
                    hint: "Choose the file again to retry.".to_string(),
                }
            }

            if uploading {
                LoadingSpinner { message: "Analyzing dataset...".to_string() }
            }

            if let Some(summary) = summary {
                SummaryCards { summary }
            }

            AnomalyTable {}
            TransformerHotspots {}
            NormalEntries {}
            RiskMap { settings: config.map.clone() }
        }
    }
}
