//! Generation request value object

use super::entities::QuestionType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to generate in one run (Value Object)
///
/// Counts for a type that is not in `types` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub types: BTreeSet<QuestionType>,
    pub multiple_choice_count: usize,
    pub answers_per_question: usize,
    pub open_count: usize,
    pub variations_per_question: usize,
}

impl GenerationRequest {
    pub fn new(types: impl IntoIterator<Item = QuestionType>) -> Self {
        Self {
            types: types.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_multiple_choice(mut self, count: usize, answers_per_question: usize) -> Self {
        self.multiple_choice_count = count;
        self.answers_per_question = answers_per_question;
        self
    }

    pub fn with_open(mut self, count: usize, variations_per_question: usize) -> Self {
        self.open_count = count;
        self.variations_per_question = variations_per_question;
        self
    }

    pub fn includes(&self, question_type: QuestionType) -> bool {
        self.types.contains(&question_type)
    }
}
