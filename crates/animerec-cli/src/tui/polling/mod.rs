//! Channel polling
//!
//! Functions that drain background task channels and report whether the
//! UI needs to redraw.

mod query;

pub use query::{poll_query, QueryPoll};

/// Result of a polling operation that may trigger UI updates
#[derive(Debug, Default)]
pub struct PollResult {
    /// Whether any data was received that requires a redraw
    pub needs_redraw: bool,
}

impl PollResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: PollResult) {
        self.needs_redraw |= other.needs_redraw;
    }
}
