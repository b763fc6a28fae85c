//! Ordering rule for catch-all options.
//!
//! "None of the above" and "All of the above" only read correctly as the
//! last option, so the orchestrator moves them there after generation.

use super::entities::Question;

pub const NONE_OF_THE_ABOVE: &str = "None of the above";
pub const ALL_OF_THE_ABOVE: &str = "All of the above";

/// Move catch-all options to the end of the option list.
///
/// "None of the above" is moved first, then "All of the above", so when
/// both are present "All of the above" ends up last. Correct indices follow
/// the moved text. Returns the number of options moved.
pub fn move_catch_all_options_last(question: &mut Question) -> usize {
    [NONE_OF_THE_ABOVE, ALL_OF_THE_ABOVE]
        .into_iter()
        .filter(|option| question.move_option_to_end(option))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct_texts(q: &Question) -> Vec<String> {
        let mut texts: Vec<String> = q
            .correct_indices()
            .iter()
            .map(|&i| q.options()[i].clone())
            .collect();
        texts.sort();
        texts
    }

    #[test]
    fn test_both_catch_all_options_move_last() {
        let mut q = Question::multiple_choice(
            0,
            "Which are mammals?",
            vec![
                ALL_OF_THE_ABOVE.to_string(),
                "Whale".to_string(),
                NONE_OF_THE_ABOVE.to_string(),
                "Bat".to_string(),
            ],
            [0],
        )
        .unwrap();

        assert_eq!(move_catch_all_options_last(&mut q), 2);
        assert_eq!(
            q.options(),
            ["Whale", "Bat", NONE_OF_THE_ABOVE, ALL_OF_THE_ABOVE]
        );
        assert_eq!(correct_texts(&q), vec![ALL_OF_THE_ABOVE.to_string()]);
        assert_eq!(q.correct_indices().iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_correct_answer_after_moved_option_shifts_down() {
        let mut q = Question::multiple_choice(
            0,
            "Capital of Italy?",
            vec![
                NONE_OF_THE_ABOVE.to_string(),
                "Paris".to_string(),
                "Rome".to_string(),
            ],
            [2],
        )
        .unwrap();

        assert_eq!(move_catch_all_options_last(&mut q), 1);
        assert_eq!(q.options(), ["Paris", "Rome", NONE_OF_THE_ABOVE]);
        assert_eq!(correct_texts(&q), vec!["Rome".to_string()]);
    }

    #[test]
    fn test_no_catch_all_is_untouched() {
        let mut q =
            Question::multiple_choice(0, "Q", vec!["a".to_string(), "b".to_string()], [1]).unwrap();
        let before = q.clone();
        assert_eq!(move_catch_all_options_last(&mut q), 0);
        assert_eq!(q, before);
    }
}
