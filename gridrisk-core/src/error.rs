/// Error types for the grid risk pipeline
use thiserror::Error;

/// Unrecoverable failures while reading a backend analysis response.
///
/// Per-record problems never surface here; they are absorbed by the parser
/// and counted in [`crate::analysis::AnalysisResult::dropped_records`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body was not valid JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level value was not a JSON object
    #[error("Analysis result must be a JSON object")]
    NotAnObject,

    /// The `summary` block is missing entirely
    #[error("Analysis result has no summary")]
    MissingSummary,
}

/// Failures reported by a [`crate::map::MapProvider`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The library is present but refused to build the map surface
    #[error("Failed to construct map surface: {0}")]
    SurfaceConstruction(String),

    /// A single marker could not be created
    #[error("Failed to construct marker: {0}")]
    MarkerConstruction(String),

    /// A popup could not be bound to its marker
    #[error("Failed to construct popup: {0}")]
    PopupConstruction(String),
}

/// Failures talking to the analysis service.
#[cfg(feature = "api")]
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer; `body` is the raw response text
    #[error("Analysis service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be turned into an analysis result
    #[error(transparent)]
    Parse(#[from] ParseError),
}
