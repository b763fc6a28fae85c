//! Generation configuration from TOML (`[generation]` section)

use exam_application::GenerationParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Token marking the correct option in model replies
    pub sentinel: String,
    /// Replies without a usable question tolerated in a row
    pub max_empty_attempts: usize,
    /// Options per multiple-choice question
    pub answers_per_question: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            sentinel: params.sentinel,
            max_empty_attempts: params.max_empty_attempts,
            answers_per_question: 4,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_sentinel(self.sentinel.clone())
            .with_max_empty_attempts(self.max_empty_attempts)
    }
}
