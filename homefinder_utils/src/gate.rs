//! Time based gates for high frequency UI events (scroll, resize, key input).
//!
//! Both gates take the current instant as an argument instead of reading a
//! clock, so callers decide where time comes from.

use std::time::{Duration, Instant};

/// Lets at most one event through per `limit`.
///
/// The first event always passes; every following event is dropped until
/// `limit` has elapsed since the last event that passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns `true` if the event at `now` should be handled.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Fires once after `wait` has passed without a new event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    wait: Duration,
    last_event: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_event: None,
        }
    }

    /// Records an event, restarting the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(last) if now.saturating_duration_since(last) >= self.wait => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }
}
