//! Explicit state of an asynchronous operation.
//!
//! Each operation a view performs is tracked as a single [`Phase`] instead of
//! independent `loading`/`error` flags, so "loading with an error" cannot be
//! represented.

/// Lifecycle of one async operation: idle, loading, then ready or failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T = ()> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Phase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Phase<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out request tickets so that responses to superseded requests can be
/// recognised and dropped.
///
/// Only the most recently issued ticket is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_accessors() {
        let idle: Phase<u32> = Phase::default();
        assert!(idle.is_idle());
        assert_eq!(idle.value(), None);

        let ready = Phase::Ready(7);
        assert!(ready.is_ready());
        assert_eq!(ready.value(), Some(&7));
        assert_eq!(ready.error(), None);

        let failed: Phase<u32> = Phase::Failed("nope".to_string());
        assert_eq!(failed.error(), Some("nope"));
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
