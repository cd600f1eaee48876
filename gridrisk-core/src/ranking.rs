//! Consumer ranking: deduplicate by consumer id, order by risk, split by class.
//!
//! Everything here is a pure function over borrowed records. The same input
//! always produces the same view, so tables and markers can recompute it on
//! every render without jitter.

use crate::record::{ConsumerRecord, RiskClass};
use serde::Serialize;
use std::collections::HashMap;

/// Exactly one record per consumer id.
///
/// Entries keep the position at which their consumer id first appeared in
/// the input; the stored record is the highest-scoring one for that id.
#[derive(Debug, Clone, Default)]
pub struct RankedConsumerView<'a> {
    entries: Vec<&'a ConsumerRecord>,
    index: HashMap<&'a str, usize>,
}

impl<'a> RankedConsumerView<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ConsumerRecord> + '_ {
        self.entries.iter().copied()
    }

    /// Record kept for `consumer_id`, if any.
    pub fn get(&self, consumer_id: &str) -> Option<&'a ConsumerRecord> {
        self.index.get(consumer_id).map(|&i| self.entries[i])
    }

    pub fn records(&self) -> &[&'a ConsumerRecord] {
        &self.entries
    }
}

/// Reduce `source` to one record per consumer id.
///
/// A later duplicate replaces the stored record only when its score is
/// strictly greater, so ties keep the first one seen.
pub fn rank(source: &[ConsumerRecord]) -> RankedConsumerView<'_> {
    let mut view = RankedConsumerView {
        entries: Vec::new(),
        index: HashMap::with_capacity(source.len()),
    };

    for record in source {
        match view.index.get(record.consumer_id.as_str()) {
            Some(&i) => {
                if record.aggregate_risk_score > view.entries[i].aggregate_risk_score {
                    view.entries[i] = record;
                }
            }
            None => {
                view.index.insert(record.consumer_id.as_str(), view.entries.len());
                view.entries.push(record);
            }
        }
    }

    view
}

/// Order records by score, highest first. Equal scores keep input order.
pub fn sort_descending_by_risk<'a, I>(records: I) -> Vec<&'a ConsumerRecord>
where
    I: IntoIterator<Item = &'a ConsumerRecord>,
{
    let mut sorted: Vec<&ConsumerRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.aggregate_risk_score.total_cmp(&a.aggregate_risk_score));
    sorted
}

/// A ranked view split around one risk class.
#[derive(Debug, Clone, Default)]
pub struct ClassPartition<'a> {
    /// Records carrying the excluded class (the normal entries, by default).
    pub excluded: Vec<&'a ConsumerRecord>,
    /// Everything else (the anomalies, by default).
    pub included: Vec<&'a ConsumerRecord>,
}

/// Split `ranked` into records of `exclude_class` and the rest, both in view order.
pub fn partition_by_class<'a>(
    ranked: &RankedConsumerView<'a>,
    exclude_class: &RiskClass,
) -> ClassPartition<'a> {
    let (excluded, included) = ranked
        .iter()
        .partition(|record| &record.risk_class == exclude_class);
    ClassPartition { excluded, included }
}

/// Per-transformer rollup of a ranked view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformerHotspot {
    pub transformer_id: String,
    /// Consumers fed from this transformer.
    pub consumers: usize,
    /// Consumers in a class that gets pinned on the map.
    pub actionable: usize,
    pub peak_score: f64,
}

/// Roll the ranked view up per transformer, most actionable first.
///
/// Consumers without a transformer id are left out.
pub fn transformer_hotspots(ranked: &RankedConsumerView<'_>) -> Vec<TransformerHotspot> {
    let mut hotspots: Vec<TransformerHotspot> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in ranked.iter() {
        let Some(transformer_id) = record.transformer_id.as_deref() else {
            continue;
        };
        let i = *index.entry(transformer_id).or_insert_with(|| {
            hotspots.push(TransformerHotspot {
                transformer_id: transformer_id.to_string(),
                consumers: 0,
                actionable: 0,
                peak_score: 0.0,
            });
            hotspots.len() - 1
        });
        let hotspot = &mut hotspots[i];
        hotspot.consumers += 1;
        if crate::map::markers::marker_color(&record.risk_class).is_some() {
            hotspot.actionable += 1;
        }
        hotspot.peak_score = hotspot.peak_score.max(record.aggregate_risk_score);
    }

    hotspots.sort_by(|a, b| {
        b.actionable
            .cmp(&a.actionable)
            .then(b.peak_score.total_cmp(&a.peak_score))
    });
    hotspots
}
