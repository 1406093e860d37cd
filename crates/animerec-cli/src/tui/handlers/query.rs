//! Query submission and result handling
//!
//! Each submit spawns one task that calls the backend and sends a single
//! [`QueryOutcome`] back over an unbounded channel. The receiver lives in
//! [`AsyncChannels`](crate::tui::app::AsyncChannels) until the main loop
//! polls it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};

use animerec_core::markup::label_line;
use animerec_core::{render_with, ApiError, CompletionBackend, RunStyle};

use crate::tui::app::{App, Screen};
use crate::tui::components::Notice;
use crate::tui::polling::{poll_query, PollResult, QueryPoll};

/// Warning shown when the title field is blank
const EMPTY_TITLE_MESSAGE: &str = "Please enter a prompt.";

/// Result of one backend call
#[derive(Debug)]
pub struct QueryOutcome {
    pub result: Result<String, ApiError>,
    pub elapsed: Duration,
}

/// Run `prompt` against `backend` in the background
fn spawn_query(
    backend: Arc<dyn CompletionBackend>,
    prompt: String,
) -> UnboundedReceiver<QueryOutcome> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let started = Instant::now();
        let result = backend.complete(&prompt).await;
        let elapsed = started.elapsed();
        if let Err(e) = &result {
            warn!(error = %e, ?elapsed, "Query failed");
        }
        // Receiver is gone only if the app already quit
        let _ = tx.send(QueryOutcome { result, elapsed });
    });
    rx
}

impl App {
    /// Submit a title. Ignored while a recommendation is in flight.
    pub fn submit_recommendation(&mut self, title: &str) {
        if self.is_loading(Screen::Main) {
            return;
        }

        let Some(prompt) = self.session.begin_recommendation(title) else {
            self.notice = Some(Notice::warning(EMPTY_TITLE_MESSAGE));
            return;
        };

        info!(title = title.trim(), "Requesting recommendation");
        self.notice = None;
        self.channels.recommendation = Some(spawn_query(Arc::clone(&self.backend), prompt));
        self.main.indicator.start();
    }

    /// Submit liked aspects. Ignored while a details query is in flight.
    pub fn submit_details(&mut self, aspects: &str) {
        if self.is_loading(Screen::Details) {
            return;
        }

        let prompt = match self.session.details_prompt(aspects) {
            Ok(prompt) => prompt,
            Err(e) => {
                self.notice = Some(Notice::warning(e.to_string()));
                return;
            }
        };

        info!(
            subject = self.session.subject().unwrap_or_default(),
            "Requesting detailed recommendation"
        );
        self.notice = None;
        self.channels.details = Some(spawn_query(Arc::clone(&self.backend), prompt));
        self.details.indicator.start();
    }

    /// Drain both query channels and apply any finished results
    pub fn poll_queries(&mut self) -> PollResult {
        let mut result = PollResult::new();

        match poll_query(&mut self.channels.recommendation) {
            QueryPoll::Pending => {}
            QueryPoll::Ready(outcome) => {
                self.main.indicator.stop();
                self.apply_recommendation(outcome);
                result.needs_redraw = true;
            }
            QueryPoll::Lost => {
                self.main.indicator.stop();
                self.report_lost_query();
                result.needs_redraw = true;
            }
        }

        let mut details = PollResult::new();
        match poll_query(&mut self.channels.details) {
            QueryPoll::Pending => {}
            QueryPoll::Ready(outcome) => {
                self.details.indicator.stop();
                self.apply_details(outcome);
                details.needs_redraw = true;
            }
            QueryPoll::Lost => {
                self.details.indicator.stop();
                self.report_lost_query();
                details.needs_redraw = true;
            }
        }
        result.merge(details);

        result
    }

    fn apply_recommendation(&mut self, outcome: QueryOutcome) {
        match outcome.result {
            Ok(text) => {
                info!(elapsed = ?outcome.elapsed, chars = text.len(), "Recommendation received");
                let mut runs = render_with(&text, &self.render_options);
                if self.title_first_line {
                    label_line(&mut runs, 0, RunStyle::Header);
                }
                self.main.output.set_runs(runs);

                // A new subject invalidates the previous refinement
                self.details_enabled = true;
                self.details.output.clear();
                self.details.input.clear();
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn apply_details(&mut self, outcome: QueryOutcome) {
        match outcome.result {
            Ok(text) => {
                info!(elapsed = ?outcome.elapsed, chars = text.len(), "Details received");
                let runs = render_with(&text, &self.render_options);
                self.details.output.set_runs(runs);
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, error: &ApiError) {
        self.notice = Some(Notice::error(format!("An error occurred: {error}")));
    }

    fn report_lost_query(&mut self) {
        warn!("Query task ended without a result");
        self.notice = Some(Notice::error(
            "An error occurred: request task ended unexpectedly",
        ));
    }
}
