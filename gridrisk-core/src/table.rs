//! Row models for the summary, anomalies and normal-entries tables.
//!
//! The anomalies table keeps backend order. The normal-entries table is built
//! from the deduplicated view, filtered to `normal`, highest risk first, so
//! the consumers closest to being flagged are listed on top.

use crate::analysis::{AnalysisResult, Summary};
use crate::ranking::{partition_by_class, rank, sort_descending_by_risk};
use crate::record::{ConsumerRecord, RiskClass};
use serde::Serialize;

/// One labelled headline value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub value: String,
}

/// The four summary values as reported, in display order.
pub fn summary_metrics(summary: &Summary) -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Grid Health Score",
            value: summary.grid_health_score.to_string(),
        },
        SummaryMetric {
            label: "Critical Cases",
            value: summary.critical_cases.to_string(),
        },
        SummaryMetric {
            label: "Anomalies Detected",
            value: summary.anomalies_detected.to_string(),
        },
        SummaryMetric {
            label: "Total Loss Calculated",
            value: summary.total_loss_calculated.to_string(),
        },
    ]
}

/// Display-ready table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub consumer_id: String,
    pub transformer_id: String,
    pub risk_class: String,
    pub risk_score: f64,
    pub risk_percent: i64,
    pub risk_percentile: Option<f64>,
    pub inspect: bool,
    /// `lat, lng` with four decimals, or empty when unresolved.
    pub location: String,
}

impl From<&ConsumerRecord> for TableRow {
    fn from(record: &ConsumerRecord) -> Self {
        TableRow {
            consumer_id: record.consumer_id.clone(),
            transformer_id: record.transformer_id.clone().unwrap_or_default(),
            risk_class: record.risk_class.to_string(),
            risk_score: record.aggregate_risk_score,
            risk_percent: record.risk_percent(),
            risk_percentile: record.risk_percentile,
            inspect: record.inspection_flag.unwrap_or(false),
            location: record
                .coordinates()
                .map(|(lat, lng)| format!("{:.4}, {:.4}", lat, lng))
                .unwrap_or_default(),
        }
    }
}

/// Anomalies in the order the backend declared them.
pub fn anomaly_rows(result: &AnalysisResult) -> Vec<TableRow> {
    result.anomalies.iter().map(TableRow::from).collect()
}

/// Deduplicated normal entries, highest risk first.
pub fn normal_rows(result: &AnalysisResult) -> Vec<TableRow> {
    let view = rank(result.ranking_source());
    let split = partition_by_class(&view, &RiskClass::Normal);
    sort_descending_by_risk(split.excluded)
        .into_iter()
        .map(TableRow::from)
        .collect()
}
