//! Application layer for exam-generator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    completion::{CompletionError, CompletionService},
    document_source::{DocumentError, DocumentSource},
    progress::{GenerationProgress, NoProgress},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::assemble_exams::{AssembleExamsUseCase, ExamAssemblyError};
pub use use_cases::clarify_question::{ClarifyQuestionError, ClarifyQuestionUseCase};
pub use use_cases::generate_questions::{
    GenerateQuestionsError, GenerateQuestionsInput, GenerateQuestionsUseCase,
};
