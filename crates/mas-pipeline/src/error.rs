use mas_llm::LlmError;
use mas_scraper::ScraperError;
use thiserror::Error;

/// Why a run produced nothing. Any failure discards the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to retrieve site content: {0}")]
    Fetch(#[from] ScraperError),

    #[error("completion request failed: {0}")]
    Completion(#[from] LlmError),
}

impl PipelineError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Fetch(_) => "fetch_failed",
            PipelineError::Completion(_) => "completion_failed",
        }
    }

    /// The single message shown to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Fetch(e) => format!("Failed to retrieve site content: {e}"),
            PipelineError::Completion(e) => format!("Failed to generate a response: {e}"),
        }
    }
}
