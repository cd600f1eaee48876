//! Report on a saved analysis response.

use crate::report::{self, ReportOptions};
use anyhow::Context;
use gridrisk_core::map::markers::DEFAULT_STROKE_WIDTH;
use gridrisk_core::parse_response;
use std::path::Path;

pub fn run_inspect(
    input: &Path,
    show_normal: bool,
    export_csv: Option<&Path>,
) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(input)
        .with_context(|| format!("reading response {}", input.display()))?;
    let result = parse_response(&body)
        .with_context(|| format!("parsing response {}", input.display()))?;

    report::publish(
        &result,
        &input.display().to_string(),
        &ReportOptions {
            show_normal,
            stroke_width: DEFAULT_STROKE_WIDTH,
        },
        export_csv,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn saved_response_is_reported_and_exported() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(
            input,
            r#"{{"summary": {{"critical_cases": 1}},
                "anomalies": [{{"consumer_id": "C1", "aggregate_risk_score": 0.7,
                                "risk_class": "critical"}}]}}"#
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("ranked.csv");

        run_inspect(input.path(), false, Some(&csv_path)).unwrap();

        let exported = std::fs::read_to_string(&csv_path).unwrap();
        assert!(exported.lines().nth(1).unwrap().starts_with("C1,"));
    }

    #[test]
    fn response_without_summary_is_rejected() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, r#"{{"anomalies": []}}"#).unwrap();
        assert!(run_inspect(input.path(), false, None).is_err());
    }
}
