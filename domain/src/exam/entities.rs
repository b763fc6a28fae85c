//! Exam layout and exam entities

use crate::core::error::DomainError;
use crate::question::{Question, QuestionType};
use serde::{Deserialize, Serialize};

/// How many exam copies to produce and how many questions of each type
/// every copy holds (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamLayout {
    pub exam_count: usize,
    pub open_per_exam: usize,
    pub multiple_choice_per_exam: usize,
}

impl ExamLayout {
    pub fn new(exam_count: usize) -> Self {
        Self {
            exam_count,
            open_per_exam: 0,
            multiple_choice_per_exam: 0,
        }
    }

    pub fn with_open_per_exam(mut self, count: usize) -> Self {
        self.open_per_exam = count;
        self
    }

    pub fn with_multiple_choice_per_exam(mut self, count: usize) -> Self {
        self.multiple_choice_per_exam = count;
        self
    }

    pub fn per_exam(&self, question_type: QuestionType) -> usize {
        match question_type {
            QuestionType::Open => self.open_per_exam,
            QuestionType::MultipleChoice => self.multiple_choice_per_exam,
        }
    }

    /// Questions of `question_type` needed across all copies
    pub fn required(&self, question_type: QuestionType) -> Result<usize, DomainError> {
        self.per_exam(question_type)
            .checked_mul(self.exam_count)
            .ok_or_else(|| {
                DomainError::InvalidExamLayout(format!(
                    "{} exams x {} {} questions is too large",
                    self.exam_count,
                    self.per_exam(question_type),
                    question_type
                ))
            })
    }

    /// Check that a pool of questions can fill every copy without reuse
    pub fn validate(&self, questions: &[Question]) -> Result<(), DomainError> {
        if self.exam_count == 0 {
            return Err(DomainError::InvalidExamLayout(
                "at least one exam is required".to_string(),
            ));
        }

        for question_type in [QuestionType::MultipleChoice, QuestionType::Open] {
            let available = questions
                .iter()
                .filter(|q| q.question_type() == question_type)
                .count();
            let required = self.required(question_type)?;
            if required > available {
                return Err(DomainError::InvalidExamLayout(format!(
                    "{} exams x {} {} questions need {} questions, only {} generated",
                    self.exam_count,
                    self.per_exam(question_type),
                    question_type,
                    required,
                    available
                )));
            }
        }

        Ok(())
    }
}

/// One exam copy (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// 1-based exam number
    pub number: usize,
    pub questions: Vec<Question>,
}

impl Exam {
    pub fn new(number: usize, questions: Vec<Question>) -> Self {
        Self { number, questions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(open: usize, mc: usize) -> Vec<Question> {
        let mut questions: Vec<Question> = (0..mc)
            .map(|i| {
                Question::multiple_choice(i, format!("MC {}", i), vec!["x".to_string()], [0])
                    .unwrap()
            })
            .collect();
        questions.extend((0..open).map(|i| Question::open(i, format!("Open {}", i))));
        questions
    }

    #[test]
    fn test_required() {
        let layout = ExamLayout::new(3)
            .with_open_per_exam(2)
            .with_multiple_choice_per_exam(4);
        assert_eq!(layout.required(QuestionType::Open).unwrap(), 6);
        assert_eq!(layout.required(QuestionType::MultipleChoice).unwrap(), 12);
    }

    #[test]
    fn test_required_overflow_is_rejected() {
        let layout = ExamLayout::new(usize::MAX).with_open_per_exam(2);
        assert!(matches!(
            layout.required(QuestionType::Open),
            Err(DomainError::InvalidExamLayout(_))
        ));
        assert_eq!(layout.required(QuestionType::MultipleChoice).unwrap(), 0);

        let err = layout.validate(&pool(4, 0)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validate_accepts_exact_pool() {
        let layout = ExamLayout::new(2).with_open_per_exam(3);
        assert!(layout.validate(&pool(6, 0)).is_ok());
    }

    #[test]
    fn test_validate_rejects_small_pool() {
        let layout = ExamLayout::new(3).with_open_per_exam(6);
        let err = layout.validate(&pool(10, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidExamLayout(_)));
        assert!(err.to_string().contains("need 18"));
    }

    #[test]
    fn test_validate_rejects_zero_exams() {
        assert!(ExamLayout::new(0).validate(&pool(1, 1)).is_err());
    }
}
