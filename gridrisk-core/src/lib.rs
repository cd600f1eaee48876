//! Risk aggregation and geospatial marker pipeline for the grid risk dashboard.
//!
//! This crate provides:
//! - `analysis` / `record`: tolerant parsing of the analysis service response
//! - `ranking`: one record per consumer, risk ordering, class partitioning
//! - `table`: row models for the summary, anomalies and normal-entries tables
//! - `map`: the `MapProvider` capability, the readiness monitor and the marker layer
//! - `sequence`: drops responses that are not from the latest request
//! - `session`: upload lifecycle built on the sequencer
//! - `client` (feature `api`): the analysis service HTTP client

pub mod analysis;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod error;
pub mod map;
pub mod ranking;
pub mod record;
pub mod sequence;
pub mod session;
pub mod table;

pub use analysis::{parse, parse_response, AnalysisResult, Summary};
pub use error::{MapError, ParseError};
pub use ranking::{rank, RankedConsumerView};
pub use record::{ConsumerRecord, RiskClass};
