//! Prompt templates for question generation

use crate::question::Question;

/// Templates for generating prompts at each stage
///
/// All builders are pure: the source content is embedded verbatim and never
/// truncated here.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for a batch of multiple-choice questions
    ///
    /// `already_asked` holds question texts from the previous batch; when it is
    /// empty the exclusion clause is omitted.
    pub fn multiple_choice(
        content: &str,
        already_asked: &[String],
        count: usize,
        options_per_question: usize,
        sentinel: &str,
    ) -> String {
        let mut prompt = format!(
            r#"Create an exam of multiple choice questions with exactly {count} questions and exactly {options_per_question} distinct possible answers in each question.
Only generate the questions and answers, not the exam itself.
Write the question on its first line, followed by one answer per line, lettered in a) b) c) format.
Separate each question from the next one with a blank line.
Prefix the line of the correct answer with "{sentinel}" in its original position.
Never repeat the same answer text within a question.
Do not write any text in all caps.
"#
        );

        if !already_asked.is_empty() {
            prompt.push_str("The questions must not be any of the following:\n");
            for question in already_asked {
                prompt.push_str(&format!("- {}\n", question));
            }
        }

        prompt.push_str("The exam should be about the following text:\n\n");
        prompt.push_str(content);
        prompt
    }

    /// Prompt for a list of open questions
    pub fn open_questions(content: &str, count: usize) -> String {
        format!(
            r#"Create exactly {count} distinct questions for an exam.
Only generate the questions, not the exam itself, and do not include answers.
Write one question per line.
The exam should be about the following text:

{content}"#
        )
    }

    /// Prompt asking for rephrasings of a single open question
    pub fn variations(question: &str, count: usize) -> String {
        format!(
            r#"Create {count} variations of the following question.
Keep the same meaning in every variation, only rephrase it.
Write one variation per line.

Question: {question}"#
        )
    }

    /// Prompt asking the model to explain the marked answer(s)
    pub fn clarification(question: &Question) -> String {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", Question::option_label(i), option))
            .collect::<Vec<_>>()
            .join("\n");

        let correct = question
            .correct_indices()
            .iter()
            .map(|&i| Question::option_label(i).to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Given this question: {}
and these answers:
{}

Why is the correct answer {}?"#,
            question.text(),
            options,
            correct
        )
    }
}
