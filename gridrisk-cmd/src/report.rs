//! Plain-text analysis report and CSV export.
//!
//! The report runs the same ranking, table and marker code the dashboard
//! uses, so its sections match what the browser would show.

use crate::pins::pin_consumers;
use chrono::{DateTime, Local};
use gridrisk_core::ranking::{sort_descending_by_risk, transformer_hotspots};
use gridrisk_core::record::risk_percent;
use gridrisk_core::table::{anomaly_rows, normal_rows, summary_metrics, TableRow};
use gridrisk_core::{rank, AnalysisResult};
use log::info;
use std::fmt::{self, Write as _};
use std::path::Path;

/// Rows shown in the hotspot section.
const MAX_HOTSPOTS: usize = 10;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Include the normal-entries table.
    pub show_normal: bool,
    pub stroke_width: u32,
}

/// Print the report for `result` and optionally export the ranked view.
pub fn publish(
    result: &AnalysisResult,
    source: &str,
    options: &ReportOptions,
    export_csv: Option<&Path>,
) -> anyhow::Result<()> {
    print!("{}", render_report(result, source, Local::now(), options)?);
    if let Some(path) = export_csv {
        let written = export_csv_file(result, path)?;
        info!("Wrote {} ranked consumers to {}", written, path.display());
    }
    Ok(())
}

pub fn render_report(
    result: &AnalysisResult,
    source: &str,
    generated_at: DateTime<Local>,
    options: &ReportOptions,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Grid risk report for {}", source)?;
    writeln!(out, "Generated {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    if result.dropped_records > 0 {
        writeln!(out, "({} malformed records ignored)", result.dropped_records)?;
    }

    out.push_str("\nSummary\n");
    for metric in summary_metrics(&result.summary) {
        writeln!(out, "  {:<24}{}", metric.label, metric.value)?;
    }

    let anomalies = anomaly_rows(result);
    writeln!(out, "\nAnomalies ({})", anomalies.len())?;
    write_rows(&mut out, &anomalies, "No anomalies in this analysis")?;

    let view = rank(result.ranking_source());
    let hotspots = transformer_hotspots(&view);
    if !hotspots.is_empty() {
        out.push_str("\nTransformer hotspots\n");
        writeln!(
            out,
            "  {:<16}{:>10}{:>12}{:>10}",
            "Transformer", "Consumers", "Actionable", "Peak"
        )?;
        for hotspot in hotspots.iter().take(MAX_HOTSPOTS) {
            writeln!(
                out,
                "  {:<16}{:>10}{:>12}{:>9}%",
                hotspot.transformer_id,
                hotspot.consumers,
                hotspot.actionable,
                risk_percent(hotspot.peak_score)
            )?;
        }
    }

    let (pins, pinned) = pin_consumers(&view, options.stroke_width);
    writeln!(
        out,
        "\nMap pins ({} placed, {} without location, {} not actionable)",
        pinned.placed, pinned.skipped_coordinates, pinned.skipped_class
    )?;
    for pin in &pins {
        writeln!(
            out,
            "  {:<7}{:>9.4}, {:>9.4}  {}",
            pin.color.name(),
            pin.position.lat,
            pin.position.lng,
            pin.popup
        )?;
    }

    if options.show_normal {
        let normal = normal_rows(result);
        writeln!(out, "\nNormal entries ({})", normal.len())?;
        write_rows(&mut out, &normal, "No normal entries in this analysis")?;
    }

    Ok(out)
}

fn write_rows(out: &mut String, rows: &[TableRow], empty_message: &str) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(out, "  {}", empty_message);
    }
    writeln!(
        out,
        "  {:<14}{:<14}{:<10}{:>6}  {:<7}{}",
        "Consumer", "Transformer", "Class", "Risk", "Inspect", "Location"
    )?;
    for row in rows {
        writeln!(
            out,
            "  {:<14}{:<14}{:<10}{:>5}%  {:<7}{}",
            row.consumer_id,
            row.transformer_id,
            row.risk_class,
            row.risk_percent,
            if row.inspect { "yes" } else { "" },
            row.location
        )?;
    }
    Ok(())
}

/// Write the deduplicated view, highest risk first, to `path`.
///
/// Returns the number of data rows written.
pub fn export_csv_file(result: &AnalysisResult, path: &Path) -> anyhow::Result<usize> {
    let view = rank(result.ranking_source());
    let mut wtr = csv::Writer::from_path(path)?;
    let mut written = 0;
    for record in sort_descending_by_risk(view.iter()) {
        wtr.serialize(TableRow::from(record))?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}
