//! Scored consumer records as produced by the analysis service.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Severity tag assigned upstream by the analysis service.
///
/// Anything outside the four known tags is kept verbatim in `Other` so the
/// tables can still show what the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskClass {
    Normal,
    Mild,
    Critical,
    Theft,
    Other(String),
}

impl RiskClass {
    /// Parse a class tag, ignoring case and surrounding whitespace.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.to_ascii_lowercase().as_str() {
            "normal" => RiskClass::Normal,
            "mild" => RiskClass::Mild,
            "critical" => RiskClass::Critical,
            "theft" => RiskClass::Theft,
            _ => RiskClass::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskClass::Normal => "normal",
            RiskClass::Mild => "mild",
            RiskClass::Critical => "critical",
            RiskClass::Theft => "theft",
            RiskClass::Other(tag) if tag.is_empty() => "unknown",
            RiskClass::Other(tag) => tag,
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One scored consumer at one point in time.
///
/// Records are never mutated after parsing; ranking and filtering only
/// hand out references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerRecord {
    /// Stable consumer identifier.
    pub consumer_id: String,
    /// Transformer the consumer is fed from, when known.
    pub transformer_id: Option<String>,
    /// Latitude in degrees; `None` when absent or not numeric.
    pub latitude: Option<f64>,
    /// Longitude in degrees; `None` when absent or not numeric.
    pub longitude: Option<f64>,
    /// Weighted risk in [0, 1]. Defaults to 0 when missing or out of range.
    pub aggregate_risk_score: f64,
    pub risk_class: RiskClass,
    /// Percentile rank of the score across the scan, when reported.
    pub risk_percentile: Option<f64>,
    /// Upstream recommendation to send an inspector.
    pub inspection_flag: Option<bool>,
}

impl ConsumerRecord {
    /// Build a record from one raw backend element.
    ///
    /// Returns `None` only when the element has no usable consumer id;
    /// every other malformed field falls back to its default.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let consumer_id = field(obj, &["consumer_id", "consumerId"]).and_then(text)?;

        Some(ConsumerRecord {
            consumer_id,
            transformer_id: field(obj, &["transformer_id", "transformerId"]).and_then(text),
            latitude: field(obj, &["latitude", "lat"]).and_then(number),
            longitude: field(obj, &["longitude", "lng", "lon"]).and_then(number),
            aggregate_risk_score: field(obj, &["aggregate_risk_score", "aggregateRiskScore"])
                .and_then(number)
                .filter(|score| (0.0..=1.0).contains(score))
                .unwrap_or(0.0),
            risk_class: field(obj, &["risk_class", "riskClass"])
                .and_then(text)
                .map(|tag| RiskClass::parse(&tag))
                .unwrap_or_else(|| RiskClass::Other(String::new())),
            risk_percentile: field(obj, &["risk_percentile", "riskPercentile"]).and_then(number),
            inspection_flag: field(obj, &["inspection_flag", "inspectionFlag"])
                .and_then(Value::as_bool),
        })
    }

    /// Resolved `(lat, lng)` if both parts are finite and in range.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude?;
        let lng = self.longitude?;
        let lat_ok = lat.is_finite() && lat >= LATITUDE_RANGE.0 && lat <= LATITUDE_RANGE.1;
        let lng_ok = lng.is_finite() && lng >= LONGITUDE_RANGE.0 && lng <= LONGITUDE_RANGE.1;
        (lat_ok && lng_ok).then_some((lat, lng))
    }

    /// Score as a whole percentage, rounded half-up.
    pub fn risk_percent(&self) -> i64 {
        risk_percent(self.aggregate_risk_score)
    }
}

/// Convert a [0, 1] score to a whole percentage, rounding half-up.
pub fn risk_percent(score: f64) -> i64 {
    (score * 100.0 + 0.5).floor() as i64
}

/// First non-null value under any of `keys`.
pub(crate) fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Finite number from a JSON number or a numeric string.
pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Non-empty text from a JSON string or number.
pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn risk_class_parse_is_case_insensitive() {
        assert_eq!(RiskClass::parse(" Theft "), RiskClass::Theft);
        assert_eq!(RiskClass::parse("CRITICAL"), RiskClass::Critical);
        assert_eq!(RiskClass::parse("high"), RiskClass::Other("high".to_string()));
        assert_eq!(RiskClass::Other(String::new()).as_str(), "unknown");
    }

    #[test]
    fn record_without_consumer_id_is_rejected() {
        assert!(ConsumerRecord::from_value(&json!({"aggregate_risk_score": 0.4})).is_none());
        assert!(ConsumerRecord::from_value(&json!({"consumer_id": "  "})).is_none());
        assert!(ConsumerRecord::from_value(&json!("C1")).is_none());
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let record = ConsumerRecord::from_value(&json!({
            "consumerId": 1042,
            "latitude": "N/A",
            "longitude": 77.2,
            "aggregateRiskScore": "oops",
        }))
        .unwrap();

        assert_eq!(record.consumer_id, "1042");
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, Some(77.2));
        assert_eq!(record.aggregate_risk_score, 0.0);
        assert_eq!(record.risk_class, RiskClass::Other(String::new()));
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let record = ConsumerRecord::from_value(&json!({
            "consumer_id": "C7",
            "latitude": "28.61",
            "longitude": " 77.20 ",
            "aggregate_risk_score": "0.42",
            "risk_class": "mild",
            "inspection_flag": true,
        }))
        .unwrap();

        assert_eq!(record.coordinates(), Some((28.61, 77.20)));
        assert_eq!(record.aggregate_risk_score, 0.42);
        assert_eq!(record.inspection_flag, Some(true));
    }

    #[test]
    fn out_of_range_coordinates_do_not_resolve() {
        let record = ConsumerRecord::from_value(&json!({
            "consumer_id": "C2", "lat": 91.0, "lng": 0.0,
        }))
        .unwrap();
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn out_of_range_score_is_treated_as_missing() {
        let over = ConsumerRecord::from_value(&json!({
            "consumer_id": "C5", "aggregate_risk_score": 1.5, "risk_class": "theft",
        }))
        .unwrap();
        let under = ConsumerRecord::from_value(&json!({
            "consumer_id": "C6", "aggregate_risk_score": "-0.3",
        }))
        .unwrap();
        let edge = ConsumerRecord::from_value(&json!({
            "consumer_id": "C8", "aggregate_risk_score": 1,
        }))
        .unwrap();

        assert_eq!(over.aggregate_risk_score, 0.0);
        assert_eq!(over.risk_percent(), 0);
        assert_eq!(under.aggregate_risk_score, 0.0);
        assert_eq!(edge.risk_percent(), 100);
    }

    #[test]
    fn risk_percent_rounds_half_up() {
        assert_eq!(risk_percent(0.9), 90);
        assert_eq!(risk_percent(0.125), 13);
        assert_eq!(risk_percent(0.004), 0);
        assert_eq!(risk_percent(1.0), 100);
    }
}
