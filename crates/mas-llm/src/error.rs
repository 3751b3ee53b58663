use thiserror::Error;

/// Errors returned by the chat-completion client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status (bad key, rate limit,
    /// unknown model, outage).
    #[error("LLM API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but carried no completion text.
    #[error("LLM response contained no completion")]
    EmptyCompletion,
}
