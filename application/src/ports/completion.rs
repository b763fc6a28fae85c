//! Completion service port
//!
//! Defines the interface for talking to a text-completion model.

use async_trait::async_trait;
use exam_domain::FunctionSchema;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during completion calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl CompletionError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, CompletionError::MalformedResponse(_))
    }
}

/// Text completion service
///
/// This port defines how the application layer asks the model for text.
/// Implementations (adapters) live in the infrastructure layer and must not
/// retry on their own.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a prompt and return the model's free-text reply
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Send a prompt forcing a call to the function described by `schema`
    ///
    /// Returns the decoded argument object. A free-text reply or an argument
    /// payload that is not a flat string map is a
    /// [`CompletionError::MalformedResponse`].
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &FunctionSchema,
    ) -> Result<HashMap<String, String>, CompletionError>;
}
