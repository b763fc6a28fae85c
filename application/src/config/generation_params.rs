//! Generation parameters for the question generation loop.
//!
//! [`GenerationParams`] groups the static parameters that control the
//! generation loop in
//! [`GenerateQuestionsUseCase`](crate::use_cases::generate_questions::GenerateQuestionsUseCase).

use exam_domain::SentinelMarker;
use serde::{Deserialize, Serialize};

/// Generation loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Token the model must put in front of every correct option.
    pub sentinel: String,
    /// Consecutive replies without a usable question before giving up.
    pub max_empty_attempts: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            sentinel: SentinelMarker::DEFAULT_TOKEN.to_string(),
            max_empty_attempts: 5,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_max_empty_attempts(mut self, max: usize) -> Self {
        self.max_empty_attempts = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.sentinel, "Correct:");
        assert_eq!(params.max_empty_attempts, 5);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_sentinel("[x]")
            .with_max_empty_attempts(2);

        assert_eq!(params.sentinel, "[x]");
        assert_eq!(params.max_empty_attempts, 2);
    }
}
