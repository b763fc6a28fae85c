//! Assemble Exams use case
//!
//! Distributes a generated question pool over several exam copies. Every
//! question is used at most once across all copies.

use exam_domain::{DomainError, Exam, ExamLayout, Question, QuestionType};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ExamAssemblyError {
    #[error("Invalid exam layout: {0}")]
    InvalidLayout(#[from] DomainError),
}

/// Use case for sampling exam copies out of a question pool
#[derive(Debug, Default)]
pub struct AssembleExamsUseCase;

impl AssembleExamsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Sample `layout.exam_count` exams using the thread-local RNG
    pub fn execute(
        &self,
        questions: &[Question],
        layout: &ExamLayout,
    ) -> Result<Vec<Exam>, ExamAssemblyError> {
        self.execute_with_rng(questions, layout, &mut rand::rng())
    }

    /// Sample exams using the given RNG
    ///
    /// Each exam holds its multiple-choice questions followed by its open
    /// questions.
    pub fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        questions: &[Question],
        layout: &ExamLayout,
        rng: &mut R,
    ) -> Result<Vec<Exam>, ExamAssemblyError> {
        layout.validate(questions)?;

        info!(
            exams = layout.exam_count,
            multiple_choice_per_exam = layout.multiple_choice_per_exam,
            open_per_exam = layout.open_per_exam,
            "Assembling exams"
        );

        let multiple_choice = sample(questions, QuestionType::MultipleChoice, layout, rng)?;
        let open = sample(questions, QuestionType::Open, layout, rng)?;

        let exams = (0..layout.exam_count)
            .map(|i| {
                let mc_chunk = chunk(&multiple_choice, layout.multiple_choice_per_exam, i);
                let open_chunk = chunk(&open, layout.open_per_exam, i);
                let exam_questions = mc_chunk.iter().chain(open_chunk).cloned().collect();
                Exam::new(i + 1, exam_questions)
            })
            .collect();

        Ok(exams)
    }
}

/// Pick `layout.required(question_type)` distinct questions of one type
fn sample<R: Rng + ?Sized>(
    questions: &[Question],
    question_type: QuestionType,
    layout: &ExamLayout,
    rng: &mut R,
) -> Result<Vec<Question>, DomainError> {
    let mut pool: Vec<Question> = questions
        .iter()
        .filter(|q| q.question_type() == question_type)
        .cloned()
        .collect();
    pool.shuffle(rng);
    pool.truncate(layout.required(question_type)?);
    debug!(%question_type, sampled = pool.len(), "Sampled questions");
    Ok(pool)
}

fn chunk(questions: &[Question], per_exam: usize, index: usize) -> &[Question] {
    let start = per_exam * index;
    &questions[start..start + per_exam]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(mc: usize, open: usize) -> Vec<Question> {
        let mut questions: Vec<Question> = (0..mc)
            .map(|i| {
                Question::multiple_choice(
                    i,
                    format!("MC {i}"),
                    vec!["a".to_string(), "b".to_string()],
                    [0],
                )
                .unwrap()
            })
            .collect();
        questions.extend((0..open).map(|i| Question::open(i, format!("Open {i}"))));
        questions
    }

    #[test]
    fn test_exams_are_numbered_and_sized() {
        let layout = ExamLayout::new(3)
            .with_multiple_choice_per_exam(2)
            .with_open_per_exam(1);
        let mut rng = StdRng::seed_from_u64(7);

        let exams = AssembleExamsUseCase::new()
            .execute_with_rng(&pool(6, 4), &layout, &mut rng)
            .unwrap();

        assert_eq!(exams.len(), 3);
        for (i, exam) in exams.iter().enumerate() {
            assert_eq!(exam.number, i + 1);
            let types: Vec<QuestionType> =
                exam.questions.iter().map(|q| q.question_type()).collect();
            assert_eq!(
                types,
                vec![
                    QuestionType::MultipleChoice,
                    QuestionType::MultipleChoice,
                    QuestionType::Open
                ]
            );
        }
    }

    #[test]
    fn test_questions_not_reused_across_exams() {
        let layout = ExamLayout::new(2)
            .with_multiple_choice_per_exam(3)
            .with_open_per_exam(2);
        let mut rng = StdRng::seed_from_u64(42);

        let exams = AssembleExamsUseCase::new()
            .execute_with_rng(&pool(6, 4), &layout, &mut rng)
            .unwrap();

        let texts: Vec<&str> = exams
            .iter()
            .flat_map(|e| e.questions.iter().map(|q| q.text()))
            .collect();
        let unique: HashSet<&str> = texts.iter().copied().collect();
        assert_eq!(texts.len(), 10);
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_same_seed_same_exams() {
        let layout = ExamLayout::new(2).with_multiple_choice_per_exam(2);
        let questions = pool(8, 0);

        let first = AssembleExamsUseCase::new()
            .execute_with_rng(&questions, &layout, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let second = AssembleExamsUseCase::new()
            .execute_with_rng(&questions, &layout, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_exceeding_pool_is_rejected() {
        let layout = ExamLayout::new(3).with_open_per_exam(2);

        let err = AssembleExamsUseCase::new()
            .execute(&pool(0, 5), &layout)
            .unwrap_err();

        assert!(matches!(
            err,
            ExamAssemblyError::InvalidLayout(DomainError::InvalidExamLayout(_))
        ));
    }

    #[test]
    fn test_overflowing_layout_is_rejected() {
        let layout = ExamLayout::new(2).with_multiple_choice_per_exam(usize::MAX);

        let err = AssembleExamsUseCase::new()
            .execute(&pool(4, 0), &layout)
            .unwrap_err();

        assert!(matches!(
            err,
            ExamAssemblyError::InvalidLayout(DomainError::InvalidExamLayout(_))
        ));
    }

    #[test]
    fn test_zero_quota_gives_empty_section() {
        let layout = ExamLayout::new(2).with_open_per_exam(1);

        let exams = AssembleExamsUseCase::new()
            .execute(&pool(4, 2), &layout)
            .unwrap();

        assert!(exams.iter().all(|e| e.questions.len() == 1));
        assert!(exams
            .iter()
            .all(|e| e.questions[0].question_type() == QuestionType::Open));
    }
}
