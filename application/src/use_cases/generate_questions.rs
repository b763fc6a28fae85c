//! Generate Questions use case
//!
//! Drives the prompt → completion → parse loop for both question types.

use crate::config::GenerationParams;
use crate::ports::completion::{CompletionError, CompletionService};
use crate::ports::progress::{GenerationProgress, NoProgress};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use exam_domain::core::string::truncate;
use exam_domain::question::move_catch_all_options_last;
use exam_domain::{
    FunctionSchema, GenerationRequest, MarkerDetector, PromptTemplate, Question, QuestionType,
    SentinelMarker, parse_multiple_choice_batch, prompt::QUESTIONS_FIELD, split_delimited,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during question generation
#[derive(Error, Debug)]
pub enum GenerateQuestionsError {
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error(
        "Generation exhausted: {produced} of {requested} questions after {attempts} replies without a usable question"
    )]
    GenerationExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },

    #[error("Invalid correct-answer sentinel: {0:?}")]
    InvalidSentinel(String),
}

/// Input for the GenerateQuestions use case
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    /// Source text the questions are about
    pub content: String,
    /// Which questions to generate and how many
    pub request: GenerationRequest,
}

impl GenerateQuestionsInput {
    pub fn new(content: impl Into<String>, request: GenerationRequest) -> Self {
        Self {
            content: content.into(),
            request,
        }
    }
}

/// Use case for generating exam questions from source text
pub struct GenerateQuestionsUseCase<C: CompletionService + 'static> {
    completion: Arc<C>,
    params: GenerationParams,
    transcript: Arc<dyn TranscriptLogger>,
    marker: Option<Arc<dyn MarkerDetector>>,
}

impl<C: CompletionService + 'static> GenerateQuestionsUseCase<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self {
            completion,
            params: GenerationParams::default(),
            transcript: Arc::new(NoTranscriptLogger),
            marker: None,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Replace the sentinel marker built from `params.sentinel`
    ///
    /// The detector's token is also the one written into the prompt.
    pub fn with_marker(mut self, marker: Arc<dyn MarkerDetector>) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn generate(
        &self,
        input: GenerateQuestionsInput,
    ) -> Result<Vec<Question>, GenerateQuestionsError> {
        self.generate_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Multiple-choice questions (if requested) come first, followed by open
    /// questions (if requested). Each sequence is numbered from 0.
    pub async fn generate_with_progress(
        &self,
        input: GenerateQuestionsInput,
        progress: &dyn GenerationProgress,
    ) -> Result<Vec<Question>, GenerateQuestionsError> {
        let request = &input.request;
        info!(
            types = ?request.types,
            multiple_choice = request.multiple_choice_count,
            open = request.open_count,
            "Starting question generation"
        );

        let mut questions = Vec::new();

        if request.includes(QuestionType::MultipleChoice) {
            let batch = self
                .generate_multiple_choice(
                    &input.content,
                    request.multiple_choice_count,
                    request.answers_per_question,
                    progress,
                )
                .await?;
            questions.extend(batch);
        }

        if request.includes(QuestionType::Open) {
            let batch = self
                .generate_open(
                    &input.content,
                    request.open_count,
                    request.variations_per_question,
                    progress,
                )
                .await?;
            questions.extend(batch);
        }

        info!(total = questions.len(), "Question generation finished");
        Ok(questions)
    }

    /// Generate exactly `total` multiple-choice questions
    ///
    /// Replies are requested until enough usable questions accumulate. Only
    /// the texts of the latest batch are excluded from the next prompt.
    /// After `max_empty_attempts` consecutive replies without a usable
    /// question the loop gives up with
    /// [`GenerateQuestionsError::GenerationExhausted`].
    pub async fn generate_multiple_choice(
        &self,
        content: &str,
        total: usize,
        options_per_question: usize,
        progress: &dyn GenerationProgress,
    ) -> Result<Vec<Question>, GenerateQuestionsError> {
        if total == 0 {
            return Ok(Vec::new());
        }

        let marker = self.marker()?;

        let mut accumulated: Vec<Question> = Vec::new();
        let mut already_asked: Vec<String> = Vec::new();
        let mut empty_attempts = 0;

        while accumulated.len() < total {
            let remaining = total - accumulated.len();
            debug!(remaining, "Requesting multiple-choice batch");
            progress.on_batch_start(QuestionType::MultipleChoice, remaining);

            let prompt = PromptTemplate::multiple_choice(
                content,
                &already_asked,
                remaining,
                options_per_question,
                marker.token(),
            );
            let reply = self.complete(&prompt).await?;
            let batch = parse_multiple_choice_batch(&reply, accumulated.len(), marker.as_ref());

            if batch.discarded > 0 {
                debug!(
                    discarded = batch.discarded,
                    "Dropped candidate blocks without a marked answer"
                );
            }

            if batch.questions.is_empty() {
                empty_attempts += 1;
                warn!(
                    attempt = empty_attempts,
                    max_attempts = self.params.max_empty_attempts,
                    "Reply contained no usable question"
                );
                progress.on_batch_empty(
                    QuestionType::MultipleChoice,
                    empty_attempts,
                    self.params.max_empty_attempts,
                );
                if empty_attempts >= self.params.max_empty_attempts {
                    return Err(GenerateQuestionsError::GenerationExhausted {
                        requested: total,
                        produced: accumulated.len(),
                        attempts: empty_attempts,
                    });
                }
                continue;
            }

            empty_attempts = 0;
            already_asked = batch
                .questions
                .iter()
                .map(|q| q.text().to_string())
                .collect();
            accumulated.extend(batch.questions);
            progress.on_batch_complete(
                QuestionType::MultipleChoice,
                accumulated.len().min(total),
                total,
            );
        }

        accumulated.truncate(total);
        for question in &mut accumulated {
            let moved = move_catch_all_options_last(question);
            if moved > 0 {
                debug!(id = question.id(), moved, "Moved catch-all options last");
            }
        }

        progress.on_generation_complete(QuestionType::MultipleChoice, accumulated.len());
        Ok(accumulated)
    }

    /// Generate `total` open questions, each with `variation_count` rephrasings
    ///
    /// The questions come from a single structured call. Each variation set
    /// takes two more calls: a free-text rephrase, then a structured
    /// extraction of that reply.
    pub async fn generate_open(
        &self,
        content: &str,
        total: usize,
        variation_count: usize,
        progress: &dyn GenerationProgress,
    ) -> Result<Vec<Question>, GenerateQuestionsError> {
        if total == 0 {
            return Ok(Vec::new());
        }

        progress.on_batch_start(QuestionType::Open, total);
        let prompt = PromptTemplate::open_questions(content, total);
        let texts = self.extract_items(&prompt).await?;
        if texts.len() != total {
            warn!(
                requested = total,
                received = texts.len(),
                "Open question count differs from request"
            );
        }
        progress.on_batch_complete(QuestionType::Open, texts.len(), total);

        let mut questions = Vec::with_capacity(texts.len());
        if variation_count > 0 {
            info!(variation_count, "Generating open question variations");
            let question_count = texts.len();
            for (id, text) in texts.into_iter().enumerate() {
                debug!(id, question = %truncate(&text, 60), "Requesting variations");
                let rephrased = self
                    .complete(&PromptTemplate::variations(&text, variation_count))
                    .await?;
                let candidates = self.extract_items(&rephrased).await?;
                let variations = distinct_variations(&text, candidates, variation_count);
                if variations.len() < variation_count {
                    warn!(
                        id,
                        requested = variation_count,
                        received = variations.len(),
                        "Fewer distinct variations than requested"
                    );
                }
                questions.push(Question::open_with_variations(id, text, variations));
                progress.on_variations_complete(id, questions.len(), question_count);
            }
        } else {
            questions.extend(
                texts
                    .into_iter()
                    .enumerate()
                    .map(|(id, text)| Question::open(id, text)),
            );
        }

        progress.on_generation_complete(QuestionType::Open, questions.len());
        Ok(questions)
    }

    fn marker(&self) -> Result<Arc<dyn MarkerDetector>, GenerateQuestionsError> {
        if let Some(marker) = &self.marker {
            return Ok(Arc::clone(marker));
        }
        let marker = SentinelMarker::try_new(self.params.sentinel.as_str())
            .ok_or_else(|| GenerateQuestionsError::InvalidSentinel(self.params.sentinel.clone()))?;
        Ok(Arc::new(marker))
    }

    /// Free-text completion, recorded in the transcript
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.transcript.log(TranscriptEvent::new(
            "prompt",
            json!({ "mode": "text", "prompt": prompt }),
        ));
        let reply = self.completion.complete(prompt).await?;
        self.transcript
            .log(TranscriptEvent::new("completion", json!({ "reply": reply })));
        Ok(reply)
    }

    /// Structured completion returning the `#`-separated question list
    async fn extract_items(&self, prompt: &str) -> Result<Vec<String>, CompletionError> {
        let schema = FunctionSchema::extract_questions();
        self.transcript.log(TranscriptEvent::new(
            "prompt",
            json!({ "mode": "structured", "function": schema.name, "prompt": prompt }),
        ));

        let arguments = self.completion.complete_structured(prompt, &schema).await?;
        self.transcript.log(TranscriptEvent::new(
            "structured_completion",
            json!({ "arguments": arguments }),
        ));

        let payload = arguments.get(QUESTIONS_FIELD).ok_or_else(|| {
            CompletionError::MalformedResponse(format!(
                "function arguments are missing the \"{}\" field",
                QUESTIONS_FIELD
            ))
        })?;
        Ok(split_delimited(payload))
    }
}

/// Keep at most `count` rephrasings that differ from the question and each other
fn distinct_variations(question: &str, candidates: Vec<String>, count: usize) -> Vec<String> {
    let question = question.trim();
    let mut variations: Vec<String> = Vec::with_capacity(count);
    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty()
            || candidate.eq_ignore_ascii_case(question)
            || variations.iter().any(|v| v.eq_ignore_ascii_case(candidate))
        {
            debug!(variation = %truncate(candidate, 60), "Dropped repeated variation");
            continue;
        }
        variations.push(candidate.to_string());
        if variations.len() == count {
            break;
        }
    }
    variations
}
