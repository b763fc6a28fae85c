//! Output formatter trait

use super::console::JsonExamFormatter;
use super::markdown::MarkdownExamRenderer;
use exam_domain::{Exam, OutputFormat};

/// Trait for rendering assembled exams into a document
pub trait ExamFormatter {
    /// Render every exam into one document
    fn format_exams(&self, exams: &[Exam]) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn ExamFormatter> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownExamRenderer),
        OutputFormat::Json => Box::new(JsonExamFormatter),
    }
}
