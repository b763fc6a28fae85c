//! Console output for generated questions and exams

use super::formatter::ExamFormatter;
use colored::Colorize;
use exam_domain::{Exam, Question, QuestionKind};

/// Formats generation results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Colored overview of every generated question
    pub fn format_questions(questions: &[Question]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Generated Questions"));
        output.push('\n');

        for question in questions {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("[{} #{}]", question.question_type().display_name(), question.id())
                    .yellow()
                    .bold(),
                question.text()
            ));

            match question.kind() {
                QuestionKind::MultipleChoice { options, correct } => {
                    for (i, option) in options.iter().enumerate() {
                        let line = format!("  {}) {}", Question::option_label(i), option);
                        if correct.contains(&i) {
                            output.push_str(&format!("{}\n", line.green()));
                        } else {
                            output.push_str(&format!("{}\n", line));
                        }
                    }
                }
                QuestionKind::Open { variations } => {
                    for variation in variations {
                        output.push_str(&format!("  {} {}\n", "~".dimmed(), variation));
                    }
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// One-line summary of an exam set
    pub fn format_summary(exams: &[Exam]) -> String {
        let questions: usize = exams.iter().map(|e| e.questions.len()).sum();
        format!(
            "{} {} exam(s), {} question(s)",
            "Done:".green().bold(),
            exams.len(),
            questions
        )
    }

    /// Format exams as JSON
    pub fn format_json(exams: &[Exam]) -> String {
        serde_json::to_string_pretty(exams).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON exam document
pub struct JsonExamFormatter;

impl ExamFormatter for JsonExamFormatter {
    fn format_exams(&self, exams: &[Exam]) -> String {
        ConsoleFormatter::format_json(exams)
    }
}
