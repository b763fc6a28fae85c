//! Markdown exam document
//!
//! ```text
//! # Exam 1
//!
//! Question 1: What is 2+2?
//!
//!  [ ] 3
//!
//! [ ] 4
//! ```

use super::formatter::ExamFormatter;
use exam_domain::{Exam, Question};

/// Renders exams as a markdown document, one `# Exam {n}` section each
pub struct MarkdownExamRenderer;

impl MarkdownExamRenderer {
    /// Numbered question list; numbering restarts at 1 for every call
    pub fn render_questions(questions: &[Question]) -> String {
        questions
            .iter()
            .enumerate()
            .map(|(i, question)| format!("Question {}: {}\n", i + 1, question.to_display_text()))
            .collect()
    }

    pub fn render_exam(exam: &Exam) -> String {
        let mut markdown = format!("# Exam {}\n\n", exam.number);
        if !exam.questions.is_empty() {
            markdown.push_str(&Self::render_questions(&exam.questions));
            markdown.push('\n');
        }
        markdown
    }
}

impl ExamFormatter for MarkdownExamRenderer {
    fn format_exams(&self, exams: &[Exam]) -> String {
        exams.iter().map(Self::render_exam).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc(id: usize, text: &str) -> Question {
        Question::multiple_choice(id, text, vec!["3".to_string(), "4".to_string()], [1]).unwrap()
    }

    #[test]
    fn test_render_questions_numbers_from_one() {
        let questions = vec![mc(7, "What is 2+2?"), Question::open(0, "Explain addition.")];

        let markdown = MarkdownExamRenderer::render_questions(&questions);

        assert_eq!(
            markdown,
            "Question 1: What is 2+2?\n\n [ ] 3\n\n[ ] 4\n\n\n\
Question 2: Explain addition.\n\n \n"
        );
    }

    #[test]
    fn test_format_exams_headings() {
        let exams = vec![
            Exam::new(1, vec![Question::open(0, "A?")]),
            Exam::new(2, vec![Question::open(1, "B?")]),
        ];

        let markdown = MarkdownExamRenderer.format_exams(&exams);

        assert!(markdown.starts_with("# Exam 1\n\nQuestion 1: A?"));
        assert!(markdown.contains("# Exam 2\n\nQuestion 1: B?"));
    }

    #[test]
    fn test_empty_exam_has_only_heading() {
        let markdown = MarkdownExamRenderer::render_exam(&Exam::new(3, Vec::new()));
        assert_eq!(markdown, "# Exam 3\n\n");
    }
}
