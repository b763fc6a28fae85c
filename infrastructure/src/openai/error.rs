//! Error types for the OpenAI adapter

use exam_application::CompletionError;
use exam_domain::core::string::{single_line, truncate};
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

const SNIPPET_LEN: usize = 300;

/// Errors that can occur when talking to an OpenAI-compatible endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}: {snippet}")]
    Status {
        status: u16,
        url: String,
        snippet: String,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("Expected a call to function `{0}`, got a text reply")]
    MissingToolCall(String),

    #[error("Invalid function arguments: {0}")]
    InvalidArguments(String),
}

impl OpenAiError {
    /// Build a status error with a single-line, bounded body snippet
    pub fn status(status: u16, url: impl Into<String>, body: &str) -> Self {
        OpenAiError::Status {
            status,
            url: url.into(),
            snippet: truncate(&single_line(body), SNIPPET_LEN),
        }
    }
}

impl From<OpenAiError> for CompletionError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => CompletionError::Timeout,
            OpenAiError::Http(_) | OpenAiError::Status { .. } => {
                CompletionError::Transport(err.to_string())
            }
            OpenAiError::Serialization(_)
            | OpenAiError::EmptyChoices
            | OpenAiError::MissingToolCall(_)
            | OpenAiError::InvalidArguments(_) => {
                CompletionError::MalformedResponse(err.to_string())
            }
            OpenAiError::MissingApiKey(_) | OpenAiError::InvalidEndpoint(_) => {
                CompletionError::Other(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snippet_is_single_line_and_bounded() {
        let body = format!("line one\nline two {}", "x".repeat(1000));
        let OpenAiError::Status { snippet, status, .. } =
            OpenAiError::status(429, "http://localhost/v1/chat/completions", &body)
        else {
            panic!("expected status error");
        };
        assert_eq!(status, 429);
        assert!(!snippet.contains('\n'));
        assert!(snippet.chars().count() <= SNIPPET_LEN + 3);
    }

    #[test]
    fn test_mapping_to_completion_error() {
        let transport: CompletionError = OpenAiError::status(500, "u", "boom").into();
        assert!(matches!(transport, CompletionError::Transport(_)));

        let malformed: CompletionError =
            OpenAiError::MissingToolCall("extract_questions".to_string()).into();
        assert!(malformed.is_malformed());

        let other: CompletionError = OpenAiError::MissingApiKey("OPENAI_API_KEY".to_string()).into();
        assert!(matches!(other, CompletionError::Other(_)));
    }
}
