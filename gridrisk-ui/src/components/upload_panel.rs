//! Dataset file picker.

use crate::state::AppState;
use dioxus::prelude::*;

/// File input that reads the chosen dataset and hands `(name, bytes)` to `on_file`.
#[component]
pub fn UploadPanel(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    let state = use_context::<AppState>();
    let (uploading, file_name) = {
        let session = state.session.read();
        (session.uploading, session.file_name.clone())
    };

    let on_change = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => on_file.call((name, bytes.to_vec())),
                Err(e) => log::error!("Failed to read {}: {}", name, e),
            }
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Dataset: "
                input {
                    r#type: "file",
                    accept: ".csv,.xlsx,.json",
                    disabled: uploading,
                    onchange: on_change,
                }
            }
            if let Some(name) = file_name {
                span {
                    style: "font-size: 12px; color: #666;",
                    if uploading { "Analyzing {name}..." } else { "{name}" }
                }
            }
        }
    }
}
