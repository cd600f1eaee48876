//! Request generation guard.
//!
//! Uploads are not cancelled when a newer one starts, so an older response
//! can land after a newer one. Every call takes a ticket, and only the
//! latest ticket's response is applied.

use log::warn;

/// Ticket for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonic counter of issued requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket; every earlier ticket becomes stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Pass `value` through only if `ticket` is still the latest.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(value)
        } else {
            warn!(
                "Dropping stale response for request {} (latest is {})",
                ticket.0, self.issued
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let mut sequencer = RequestSequencer::new();
        let a = sequencer.issue();
        let b = sequencer.issue();
        assert!(b > a);
        assert_eq!(b.generation(), 2);
    }

    #[test]
    fn only_latest_response_is_accepted() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert_eq!(sequencer.accept(second, "new"), Some("new"));
        assert_eq!(sequencer.accept(first, "old"), None);
        assert!(!sequencer.is_latest(first));
    }

    #[test]
    fn single_request_is_accepted() {
        let mut sequencer = RequestSequencer::new();
        let only = sequencer.issue();
        assert_eq!(sequencer.accept(only, 7), Some(7));
    }
}
