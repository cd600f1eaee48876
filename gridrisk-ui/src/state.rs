//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::map_provider::SurfaceHandle;
use dioxus::prelude::*;
use gridrisk_core::map::readiness::ReadinessState;
use gridrisk_core::sequence::RequestTicket;
use gridrisk_core::session::UploadSession;
use gridrisk_core::AnalysisResult;

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current upload, its result and any failure message
    pub session: Signal<UploadSession>,
    /// Map library readiness, mirrored from the monitor task
    pub readiness: Signal<ReadinessState<SurfaceHandle>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(UploadSession::new()),
            readiness: Signal::new(ReadinessState::Unchecked),
        }
    }

    pub fn begin_upload(&mut self, file_name: String) -> RequestTicket {
        self.session.write().begin(file_name)
    }

    /// Apply an upload outcome if it belongs to the latest ticket.
    ///
    /// A stale outcome is dropped without notifying subscribers.
    pub fn finish_upload(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, String>,
    ) -> bool {
        if !self.session.peek().is_current(ticket) {
            log::warn!(
                "Dropping response for superseded upload {}",
                ticket.generation()
            );
            return false;
        }
        self.session.write().finish(ticket, outcome)
    }
}
