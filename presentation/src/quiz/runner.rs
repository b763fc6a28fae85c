//! Interactive multiple-choice quiz.
//!
//! ```text
//! Question 1/2: What is 2+2?
//!   a) 3
//!   b) 4
//!   c) 5
//! answer> b
//! ✓ Correct
//! ```
//!
//! Answers are option letters separated by commas or spaces (`a,c`). An
//! empty line skips the question; end of input stops the quiz.

use colored::Colorize;
use exam_domain::{Question, QuestionType, Response};
use std::io::{self, BufRead, Write};

/// Result of a quiz run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizScore {
    /// Multiple-choice questions presented
    pub total: usize,
    /// Questions that received an answer
    pub answered: usize,
    /// Correctly answered questions
    pub correct: usize,
    /// Ids of answered questions that were wrong
    pub missed: Vec<usize>,
}

impl QuizScore {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.total as f64
        }
    }
}

enum Answer {
    Given(Response),
    Skipped,
    EndOfInput,
}

/// Runs a quiz over any line-based input and text output
pub struct QuizRunner<R, W> {
    input: R,
    output: W,
}

impl QuizRunner<io::StdinLock<'static>, io::Stdout> {
    /// Quiz on the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> QuizRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every multiple-choice question, record the answers and score them
    pub fn run(&mut self, questions: &mut [Question]) -> io::Result<QuizScore> {
        let total = questions
            .iter()
            .filter(|q| q.question_type() == QuestionType::MultipleChoice)
            .count();
        let mut score = QuizScore {
            total,
            ..QuizScore::default()
        };

        let mut number = 0;
        for question in questions
            .iter_mut()
            .filter(|q| q.question_type() == QuestionType::MultipleChoice)
        {
            number += 1;
            self.show_question(question, number, total)?;

            let response = match self.read_answer(question)? {
                Answer::Given(response) => response,
                Answer::Skipped => {
                    writeln!(self.output, "{}", "Skipped".dimmed())?;
                    continue;
                }
                Answer::EndOfInput => break,
            };

            question.record_response(response);
            score.answered += 1;
            if question.is_correct() {
                score.correct += 1;
                writeln!(self.output, "{}", "✓ Correct".green())?;
            } else {
                score.missed.push(question.id());
                writeln!(
                    self.output,
                    "{} (answer: {})",
                    "✗ Wrong".red(),
                    Self::correct_labels(question)
                )?;
            }
            writeln!(self.output)?;
        }

        writeln!(
            self.output,
            "{}",
            format!("Score: {}/{}", score.correct, score.total).bold()
        )?;
        self.output.flush()?;
        Ok(score)
    }

    fn show_question(&mut self, question: &Question, number: usize, total: usize) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            format!("Question {}/{}:", number, total).cyan().bold(),
            question.text()
        )?;
        for (i, option) in question.options().iter().enumerate() {
            writeln!(self.output, "  {}) {}", Question::option_label(i), option)?;
        }
        Ok(())
    }

    /// Read until a valid answer, an empty line or end of input
    fn read_answer(&mut self, question: &Question) -> io::Result<Answer> {
        loop {
            write!(self.output, "{} ", "answer>".magenta().bold())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Answer::EndOfInput);
            }

            let line = line.trim();
            if line.is_empty() {
                return Ok(Answer::Skipped);
            }

            match Response::from_labels(line, question.options().len()) {
                Ok(response) => return Ok(Answer::Given(response)),
                Err(e) => writeln!(self.output, "{} {}", "!".yellow(), e)?,
            }
        }
    }

    fn correct_labels(question: &Question) -> String {
        question
            .correct_indices()
            .iter()
            .map(|&i| Question::option_label(i).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn questions() -> Vec<Question> {
        vec![
            Question::multiple_choice(
                0,
                "What is 2+2?",
                vec!["3".to_string(), "4".to_string(), "5".to_string()],
                [1],
            )
            .unwrap(),
            Question::open(0, "Explain addition."),
            Question::multiple_choice(
                1,
                "Pick the even numbers",
                vec!["2".to_string(), "3".to_string(), "4".to_string()],
                [0, 2],
            )
            .unwrap(),
        ]
    }

    fn run(input: &str, questions: &mut [Question]) -> (QuizScore, String) {
        let mut output = Vec::new();
        let score = QuizRunner::new(Cursor::new(input.to_string()), &mut output)
            .run(questions)
            .unwrap();
        (score, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_all_correct() {
        let mut qs = questions();
        let (score, output) = run("b\na, c\n", &mut qs);

        assert_eq!(score.total, 2);
        assert_eq!(score.answered, 2);
        assert_eq!(score.correct, 2);
        assert!(score.missed.is_empty());
        assert_eq!(score.percentage(), 100.0);
        assert!(output.contains("Score: 2/2"));
        assert_eq!(qs[0].response(), Some(&Response::choices([1])));
    }

    #[test]
    fn test_partial_multi_answer_is_wrong() {
        let mut qs = questions();
        let (score, output) = run("b\na\n", &mut qs);

        assert_eq!(score.correct, 1);
        assert_eq!(score.missed, vec![1]);
        assert!(output.contains("answer: a, c"));
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let mut qs = questions();
        let (score, output) = run("z\nb\nc a\n", &mut qs);

        assert!(output.contains("does not exist"));
        assert_eq!(score.answered, 2);
        assert_eq!(score.correct, 2);
    }

    #[test]
    fn test_empty_line_skips_and_eof_stops() {
        let mut qs = questions();
        let (score, output) = run("\n", &mut qs);

        assert!(output.contains("Skipped"));
        assert_eq!(score.answered, 0);
        assert_eq!(score.correct, 0);
        assert!(qs[0].response().is_none());
        assert!(qs[2].response().is_none());
        assert!(output.contains("Score: 0/2"));
    }

    #[test]
    fn test_open_questions_are_not_asked() {
        let mut qs = questions();
        let (_, output) = run("b\na,c\n", &mut qs);
        assert!(!output.contains("Explain addition."));
        assert!(output.contains("Question 2/2:"));
    }
}
