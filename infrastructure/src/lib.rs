//! Infrastructure layer for exam-generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileExamConfig, FileGenerationConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use document::FileDocumentSource;
pub use logging::JsonlTranscriptLogger;
pub use openai::{
    client::{OpenAiCompletionService, OpenAiSettings},
    error::{OpenAiError, Result},
};
