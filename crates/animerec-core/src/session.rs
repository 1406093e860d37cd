//! Query session
//!
//! Remembers the title of the last recommendation request so the detail
//! screen can refine it. Owned by the caller and passed where needed.

use crate::error::SessionError;
use crate::prompt::PromptBuilder;

#[derive(Debug, Clone, Default)]
pub struct Session {
    prompts: PromptBuilder,
    subject: Option<String>,
}

impl Session {
    pub fn new(prompts: PromptBuilder) -> Self {
        Self {
            prompts,
            subject: None,
        }
    }

    /// Title of the last recommendation request, if any
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Record `title` as the subject and build its recommendation prompt.
    ///
    /// Returns `None` for a blank title; the stored subject is cleared so
    /// a later detail request cannot refine a stale title.
    pub fn begin_recommendation(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            self.subject = None;
            return None;
        }
        self.subject = Some(title.to_string());
        Some(self.prompts.recommendation(title))
    }

    /// Build the detail prompt for the current subject
    pub fn details_prompt(&self, aspects: &str) -> Result<String, SessionError> {
        let subject = self.subject.as_deref().ok_or(SessionError::NoSubject)?;
        Ok(self.prompts.details(subject, aspects.trim()))
    }
}
