//! Clarify Question use case
//!
//! Asks the model to explain why the marked answers of a multiple-choice
//! question are correct.

use crate::ports::completion::{CompletionError, CompletionService};
use exam_domain::{PromptTemplate, Question, QuestionType};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ClarifyQuestionError {
    #[error("Question {0} is not a multiple-choice question")]
    NotMultipleChoice(usize),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

pub struct ClarifyQuestionUseCase<C: CompletionService + 'static> {
    completion: Arc<C>,
}

impl<C: CompletionService + 'static> ClarifyQuestionUseCase<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self { completion }
    }

    pub async fn execute(&self, question: &Question) -> Result<String, ClarifyQuestionError> {
        if question.question_type() != QuestionType::MultipleChoice {
            return Err(ClarifyQuestionError::NotMultipleChoice(question.id()));
        }

        info!(id = question.id(), "Requesting clarification");
        let prompt = PromptTemplate::clarification(question);
        let explanation = self.completion.complete(&prompt).await?;
        Ok(explanation.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use exam_domain::FunctionSchema;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct EchoCompletion {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionService for EchoCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("  Because 2+2 equals 4.\n".to_string())
        }

        async fn complete_structured(
            &self,
            _prompt: &str,
            _schema: &FunctionSchema,
        ) -> Result<HashMap<String, String>, CompletionError> {
            Err(CompletionError::Other("not used".to_string()))
        }
    }

    fn echo() -> Arc<EchoCompletion> {
        Arc::new(EchoCompletion {
            prompts: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_clarify_multiple_choice() {
        let completion = echo();
        let uc = ClarifyQuestionUseCase::new(Arc::clone(&completion));
        let question = Question::multiple_choice(
            0,
            "What is 2+2?",
            vec!["3".to_string(), "4".to_string()],
            [1],
        )
        .unwrap();

        let explanation = uc.execute(&question).await.unwrap();

        assert_eq!(explanation, "Because 2+2 equals 4.");
        let prompt = completion.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("What is 2+2?"));
        assert!(prompt.contains("b. 4"));
    }

    #[tokio::test]
    async fn test_clarify_rejects_open_question() {
        let completion = echo();
        let uc = ClarifyQuestionUseCase::new(Arc::clone(&completion));

        let err = uc.execute(&Question::open(3, "Why?")).await.unwrap_err();

        assert!(matches!(err, ClarifyQuestionError::NotMultipleChoice(3)));
        assert!(completion.prompts.lock().unwrap().is_empty());
    }
}
