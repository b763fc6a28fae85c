//! Presentation layer for exam-generator
//!
//! This crate contains CLI definitions, exam renderers,
//! progress reporters, and the interactive quiz.

pub mod cli;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, QuestionTypeArg};
pub use output::console::{ConsoleFormatter, JsonExamFormatter};
pub use output::formatter::{ExamFormatter, formatter_for};
pub use output::markdown::MarkdownExamRenderer;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::{QuizRunner, QuizScore};
