//! Debounced search input.
//!
//! Every keystroke restarts the timer; only the last one fires. The clock is
//! injected so tests never sleep.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the dispatched search.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    input: String,
    delay: Duration,
    last_edit: Option<Instant>,
    pending: bool,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            delay,
            last_edit: None,
            pending: false,
        }
    }

    /// Current (possibly not yet dispatched) input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Set the initial text without scheduling a dispatch. This is the
    /// first-render guard: restoring a persisted search term must not fire
    /// a spurious search.
    pub fn seed(&mut self, initial: &str) {
        self.input = initial.to_string();
        self.pending = false;
        self.last_edit = None;
    }

    /// Record a keystroke, restarting the timer.
    pub fn note_input(&mut self, text: &str, now: Instant) {
        self.input = text.to_string();
        self.last_edit = Some(now);
        self.pending = true;
    }

    /// Fire if the delay has elapsed since the last keystroke. At most one
    /// dispatch per edit burst.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if !self.pending {
            return None;
        }
        let last_edit = self.last_edit?;
        if now.duration_since(last_edit) < self.delay {
            return None;
        }
        self.pending = false;
        Some(self.input.clone())
    }

    /// Drop any pending dispatch.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
