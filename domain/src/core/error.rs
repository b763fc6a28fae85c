//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Multiple-choice question has no options")]
    NoOptions,

    #[error("Multiple-choice question has no correct answer")]
    NoCorrectAnswer,

    #[error("Correct answer index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid exam layout: {0}")]
    InvalidExamLayout(String),
}

impl DomainError {
    /// Check if this error was caused by a malformed question record
    pub fn is_invalid_question(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_)
                | DomainError::NoOptions
                | DomainError::NoCorrectAnswer
                | DomainError::CorrectIndexOutOfRange { .. }
        )
    }
}
