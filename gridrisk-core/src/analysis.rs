//! The analysis service response and its tolerant parser.
//!
//! The backend answers either `{ "status": "success", "data": {...} }` or the
//! bare result object. Both shapes are accepted. Only a non-object result or
//! a missing `summary` is fatal; everything below that degrades to defaults.

use crate::error::ParseError;
use crate::record::{field, number, ConsumerRecord};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

/// Headline metrics reported for one scan, kept exactly as the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Overall grid health, nominally 0 to 100.
    pub grid_health_score: f64,
    pub critical_cases: i64,
    pub anomalies_detected: i64,
    /// Estimated energy loss across the scan.
    pub total_loss_calculated: f64,
}

impl Summary {
    fn from_object(obj: &Map<String, Value>) -> Self {
        let float = |keys: &[&str]| field(obj, keys).and_then(number).unwrap_or(0.0);
        let count = |keys: &[&str]| float(keys).round() as i64;

        Summary {
            grid_health_score: float(&["grid_health_score", "gridHealthScore"]),
            critical_cases: count(&["critical_cases", "criticalCases"]),
            anomalies_detected: count(&["anomalies_detected", "anomaliesDetected"]),
            total_loss_calculated: float(&["total_loss_calculated", "totalLossCalculated"]),
        }
    }
}

/// One backend response, created fresh per successful call and replaced
/// wholesale by the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub summary: Summary,
    /// Backend-declared anomalies, in backend order.
    pub anomalies: Vec<ConsumerRecord>,
    /// Every scored record including normal ones, when the backend sent it.
    pub all_records: Option<Vec<ConsumerRecord>>,
    /// Elements dropped for lacking a consumer id, across both lists.
    pub dropped_records: usize,
}

impl AnalysisResult {
    /// Records the ranking engine should read: `all_records`, or
    /// `anomalies` when the full list is absent.
    pub fn ranking_source(&self) -> &[ConsumerRecord] {
        self.all_records.as_deref().unwrap_or(&self.anomalies)
    }
}

/// Parse an already-decoded result object.
pub fn parse(raw: &Value) -> Result<AnalysisResult, ParseError> {
    let obj = raw.as_object().ok_or(ParseError::NotAnObject)?;
    let summary = field(obj, &["summary"])
        .and_then(Value::as_object)
        .ok_or(ParseError::MissingSummary)?;

    let mut dropped = 0;
    let anomalies = match field(obj, &["anomalies"]) {
        Some(list) => parse_records(list, "anomalies", &mut dropped),
        None => Vec::new(),
    };
    let all_records = field(obj, &["all_records", "allRecords"])
        .filter(|list| list.is_array())
        .map(|list| parse_records(list, "all_records", &mut dropped));

    if dropped > 0 {
        warn!("Dropped {} analysis records without a consumer id", dropped);
    }

    Ok(AnalysisResult {
        summary: Summary::from_object(summary),
        anomalies,
        all_records,
        dropped_records: dropped,
    })
}

/// Parse a raw response body, accepting both the enveloped and bare shapes.
pub fn parse_response(body: &str) -> Result<AnalysisResult, ParseError> {
    let raw: Value = serde_json::from_str(body)?;
    parse(unwrap_envelope(&raw))
}

/// Return `data` from a `{status: "success", data}` envelope, or the value
/// itself for any other shape.
pub fn unwrap_envelope(raw: &Value) -> &Value {
    let is_success = raw.get("status").and_then(Value::as_str) == Some("success");
    match raw.get("data") {
        Some(data) if is_success && data.is_object() => data,
        _ => raw,
    }
}

fn parse_records(list: &Value, name: &str, dropped: &mut usize) -> Vec<ConsumerRecord> {
    let Some(items) = list.as_array() else {
        warn!("Ignoring `{}`: expected an array", name);
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let record = ConsumerRecord::from_value(item);
            if record.is_none() {
                *dropped += 1;
            }
            record
        })
        .collect()
}
