//! Upload lifecycle for the dashboard.
//!
//! An upload clears the previous analysis before its request is sent, and
//! only the response for the newest upload is ever applied.

use crate::analysis::AnalysisResult;
use crate::sequence::{RequestSequencer, RequestTicket};

/// What the dashboard currently shows about uploads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    /// Latest analysis; `None` before the first upload and while one runs.
    pub result: Option<AnalysisResult>,
    pub uploading: bool,
    /// Message for the last failed upload, cleared by the next upload.
    pub error_msg: Option<String>,
    pub file_name: Option<String>,
    sequencer: RequestSequencer,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous result and error and issue a ticket for `file_name`.
    pub fn begin(&mut self, file_name: String) -> RequestTicket {
        self.result = None;
        self.error_msg = None;
        self.file_name = Some(file_name);
        self.uploading = true;
        self.sequencer.issue()
    }

    /// Whether `ticket` belongs to the newest upload.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.sequencer.is_latest(ticket)
    }

    /// Apply `outcome` if `ticket` is still the latest upload.
    ///
    /// Returns `false`, leaving the session untouched, for a stale ticket.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, String>,
    ) -> bool {
        let Some(outcome) = self.sequencer.accept(ticket, outcome) else {
            return false;
        };
        self.uploading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error_msg = Some(message),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parse;
    use serde_json::json;

    fn result_with(consumer_id: &str) -> AnalysisResult {
        parse(&json!({
            "summary": {},
            "anomalies": [{"consumer_id": consumer_id, "risk_class": "mild"}],
        }))
        .unwrap()
    }

    #[test]
    fn begin_clears_previous_result_and_error() {
        let mut session = UploadSession::new();
        let first = session.begin("a.csv".to_string());
        assert!(session.finish(first, Ok(result_with("C1"))));
        session.error_msg = Some("old failure".to_string());

        session.begin("b.csv".to_string());
        assert_eq!(session.result, None);
        assert_eq!(session.error_msg, None);
        assert!(session.uploading);
        assert_eq!(session.file_name.as_deref(), Some("b.csv"));
    }

    #[test]
    fn success_sets_result_and_stops_uploading() {
        let mut session = UploadSession::new();
        let ticket = session.begin("a.csv".to_string());

        assert!(session.finish(ticket, Ok(result_with("C1"))));
        assert!(!session.uploading);
        assert_eq!(session.result, Some(result_with("C1")));
        assert_eq!(session.error_msg, None);
    }

    #[test]
    fn failure_sets_error_and_stops_uploading() {
        let mut session = UploadSession::new();
        let ticket = session.begin("a.csv".to_string());

        assert!(session.finish(ticket, Err("Analysis service returned 500: boom".to_string())));
        assert!(!session.uploading);
        assert_eq!(session.result, None);
        assert_eq!(
            session.error_msg.as_deref(),
            Some("Analysis service returned 500: boom")
        );
    }

    #[test]
    fn stale_response_leaves_session_untouched() {
        let mut session = UploadSession::new();
        let old = session.begin("a.csv".to_string());
        let new = session.begin("b.csv".to_string());

        assert!(!session.is_current(old));
        let before = session.clone();
        assert!(!session.finish(old, Ok(result_with("OLD"))));
        assert_eq!(session, before);
        assert!(session.uploading);
        assert_eq!(session.result, None);

        assert!(session.finish(new, Ok(result_with("NEW"))));
        assert_eq!(session.result, Some(result_with("NEW")));
    }

    #[test]
    fn stale_failure_does_not_replace_newer_result() {
        let mut session = UploadSession::new();
        let old = session.begin("a.csv".to_string());
        let new = session.begin("b.csv".to_string());

        assert!(session.finish(new, Ok(result_with("NEW"))));
        assert!(!session.finish(old, Err("timeout".to_string())));
        assert_eq!(session.error_msg, None);
        assert_eq!(session.result, Some(result_with("NEW")));
    }
}
