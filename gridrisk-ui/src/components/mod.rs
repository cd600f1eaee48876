//! Dashboard RSX components.

mod anomaly_table;
mod error_display;
mod hotspots;
mod loading_spinner;
mod normal_entries;
mod record_table;
mod risk_map;
mod section_header;
mod summary_cards;
mod upload_panel;

pub use anomaly_table::AnomalyTable;
pub use error_display::{ErrorDisplay, Severity};
pub use hotspots::TransformerHotspots;
pub use loading_spinner::LoadingSpinner;
pub use normal_entries::NormalEntries;
pub use record_table::RecordTable;
pub use risk_map::{RiskMap, MAP_CONTAINER_ID};
pub use section_header::SectionHeader;
pub use summary_cards::SummaryCards;
pub use upload_panel::UploadPanel;
