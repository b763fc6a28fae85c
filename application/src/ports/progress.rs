//! Progress notification port
//!
//! Defines the interface for reporting progress during question generation.

use exam_domain::QuestionType;

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain log lines, etc.)
pub trait GenerationProgress: Send + Sync {
    /// Called before each completion request for a batch of questions
    fn on_batch_start(&self, question_type: QuestionType, requested: usize);

    /// Called after a batch produced usable questions
    fn on_batch_complete(&self, question_type: QuestionType, produced: usize, total: usize);

    /// Called when a batch produced nothing usable
    fn on_batch_empty(&self, _question_type: QuestionType, _attempt: usize, _max_attempts: usize) {}

    /// Called after the variations of one open question were generated
    fn on_variations_complete(&self, _question_id: usize, _done: usize, _total: usize) {}

    /// Called when all questions of a type are ready
    fn on_generation_complete(&self, _question_type: QuestionType, _produced: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_batch_start(&self, _question_type: QuestionType, _requested: usize) {}
    fn on_batch_complete(&self, _question_type: QuestionType, _produced: usize, _total: usize) {}
}
