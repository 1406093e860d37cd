//! Prompt construction
//!
//! Every prompt sent to the model is prefixed with the reference site so
//! answers are grounded in its catalogue.

/// Default reference site for recommendations
pub const DEFAULT_REFERENCE_SITE: &str = "https://myanimelist.net/";

/// Builds the recommendation and detail prompts
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    reference_site: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_SITE)
    }
}

impl PromptBuilder {
    pub fn new(reference_site: impl Into<String>) -> Self {
        Self {
            reference_site: reference_site.into(),
        }
    }

    pub fn reference_site(&self) -> &str {
        &self.reference_site
    }

    /// Prompt asking for a recommendation based on one liked title
    pub fn recommendation(&self, title: &str) -> String {
        self.grounded(&format!(
            "recommend me an anime to watch based on the following anime I liked: {}",
            title
        ))
    }

    /// Prompt refining a recommendation with the aspects the user liked
    pub fn details(&self, title: &str, aspects: &str) -> String {
        self.grounded(&format!(
            "Recommend me an anime based on the following aspects I specifically liked in {} and this website: {}, and don't tell me to go to MAL website myself: {}",
            title, self.reference_site, aspects
        ))
    }

    fn grounded(&self, prompt: &str) -> String {
        format!("Using this website: {}, {}", self.reference_site, prompt)
    }
}
