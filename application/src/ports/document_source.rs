//! Document source port
//!
//! Supplies the source text questions are generated from.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading source text
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Failed to read document {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Document is empty: {0}")]
    Empty(String),
}

/// Source of the full text an exam is about
///
/// Chunking or size limits are the implementation's concern.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human readable name of the source (path, URL, ...)
    fn name(&self) -> &str;

    /// Read the full source text
    async fn read(&self) -> Result<String, DocumentError>;
}
