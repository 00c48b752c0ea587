//! Error types for answering shopping questions.

use thiserror::Error;
use vitrine_search::SearchError;

/// Errors from the text-generation step.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key was configured.
    #[error("no API key configured for {provider}")]
    MissingApiKey { provider: String },

    /// The provider answered with a non-success status.
    #[error("HTTP {status} from {provider}: {message}")]
    Http {
        provider: String,
        status: u16,
        message: String,
    },

    /// The provider returned a rate-limit response.
    #[error("rate limited by {provider}")]
    RateLimited { provider: String },

    /// The request did not complete in time.
    #[error("request to {provider} timed out")]
    Timeout { provider: String },

    /// The response could not be parsed or had no completion text.
    #[error("malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl GenerationError {
    /// Returns `true` when the error is transient and the request may
    /// succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::MissingApiKey { .. } | Self::MalformedResponse { .. } => false,
        }
    }
}

/// Errors from answering a question.
///
/// The variants keep "the catalog is unusable" apart from "the generation
/// step failed"; an empty match set is not an error at all.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The question was empty or whitespace.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// Retrieval could not run.
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] SearchError),

    /// The language model step failed.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Convenience alias for assistant results.
pub type AssistResult<T> = std::result::Result<T, AssistError>;
