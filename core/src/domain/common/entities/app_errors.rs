use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("LLM API returned error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("LLM API request failed: {0}")]
    Transport(String),

    #[error("Model did not return valid JSON.")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn missing_address() -> Self {
        CoreError::Validation("Missing or invalid 'address'.".to_string())
    }

    pub fn missing_api_key() -> Self {
        CoreError::Configuration(
            "OPENAI_API_KEY is not configured in this environment.".to_string(),
        )
    }

    /// Whether a bounded retry of the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoreError::Transport(_) => true,
            CoreError::Upstream { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
