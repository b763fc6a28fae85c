//! Question entity and its lifecycle operations.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

static NO_INDICES: BTreeSet<usize> = BTreeSet::new();

/// The closed set of question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Free-form question, never auto-graded
    Open,
    /// Question with a fixed list of options and one or more correct answers
    MultipleChoice,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Open => "open",
            QuestionType::MultipleChoice => "multiple_choice",
        }
    }

    /// Human readable label used in rendered documents
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionType::Open => "Open question",
            QuestionType::MultipleChoice => "Multiple choice",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(QuestionType::Open),
            "mc" | "multiple_choice" | "multiple-choice" => Ok(QuestionType::MultipleChoice),
            other => Err(format!("unknown question type: {}", other)),
        }
    }
}

/// Type-specific payload of a [`Question`].
///
/// Every consumer (parser, scorer, renderer) matches on this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Open {
        /// Meaning-preserving rephrasings of the question text
        variations: Vec<String>,
    },
    MultipleChoice {
        options: Vec<String>,
        /// Zero-based indices into `options`
        correct: BTreeSet<usize>,
    },
}

/// A respondent's answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// Selected option indices (multiple choice)
    Choices(BTreeSet<usize>),
    /// Free-form answer (open questions)
    Text(String),
}

impl Response {
    /// Build a choice response from indices.
    pub fn choices(indices: impl IntoIterator<Item = usize>) -> Self {
        Response::Choices(indices.into_iter().collect())
    }

    /// Parse option labels such as `"b"`, `"a,c"` or `"A C"`.
    ///
    /// Every label must address one of the `option_count` options.
    pub fn from_labels(input: &str, option_count: usize) -> Result<Self, DomainError> {
        let mut indices = BTreeSet::new();
        for label in input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|l| !l.is_empty())
        {
            let mut chars = label.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(DomainError::InvalidResponse(format!(
                    "'{}' is not a single option letter",
                    label
                )));
            };
            let c = c.to_ascii_lowercase();
            if !c.is_ascii_lowercase() {
                return Err(DomainError::InvalidResponse(format!(
                    "'{}' is not an option letter",
                    label
                )));
            }
            let index = (c as u8 - b'a') as usize;
            if index >= option_count {
                return Err(DomainError::InvalidResponse(format!(
                    "option '{}' does not exist",
                    c
                )));
            }
            indices.insert(index);
        }

        if indices.is_empty() {
            return Err(DomainError::InvalidResponse(
                "no option selected".to_string(),
            ));
        }
        Ok(Response::Choices(indices))
    }
}

/// A generated exam question (Entity)
///
/// Created by the response parser or the generation orchestrator. After
/// creation only the recorded response changes; the orchestrator may also
/// move trailing options (see [`crate::question::reorder`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: usize,
    text: String,
    #[serde(flatten)]
    kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<Response>,
}

impl Question {
    /// Options addressable by a single letter label (`a`..=`z`)
    pub const MAX_OPTIONS: usize = 26;

    /// Create an open question without variations
    pub fn open(id: usize, text: impl Into<String>) -> Self {
        Self::open_with_variations(id, text, Vec::new())
    }

    /// Create an open question carrying rephrasings
    pub fn open_with_variations(id: usize, text: impl Into<String>, variations: Vec<String>) -> Self {
        Self {
            id,
            text: text.into(),
            kind: QuestionKind::Open { variations },
            response: None,
        }
    }

    /// Create a multiple-choice question, validating option/answer invariants
    pub fn multiple_choice(
        id: usize,
        text: impl Into<String>,
        options: Vec<String>,
        correct: impl IntoIterator<Item = usize>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }
        if options.is_empty() {
            return Err(DomainError::NoOptions);
        }

        let correct: BTreeSet<usize> = correct.into_iter().collect();
        if correct.is_empty() {
            return Err(DomainError::NoCorrectAnswer);
        }
        if let Some(&index) = correct.iter().next_back()
            && index >= options.len()
        {
            return Err(DomainError::CorrectIndexOutOfRange {
                index,
                options: options.len(),
            });
        }

        Ok(Self {
            id,
            text,
            kind: QuestionKind::MultipleChoice { options, correct },
            response: None,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::Open { .. } => QuestionType::Open,
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
        }
    }

    /// Options of a multiple-choice question; empty for open questions
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::Open { .. } => &[],
        }
    }

    /// Correct option indices; empty for open questions
    pub fn correct_indices(&self) -> &BTreeSet<usize> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct, .. } => correct,
            QuestionKind::Open { .. } => &NO_INDICES,
        }
    }

    /// Variations of an open question; empty for multiple choice
    pub fn variations(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Open { variations } => variations,
            QuestionKind::MultipleChoice { .. } => &[],
        }
    }

    /// Overwrite the recorded response
    pub fn record_response(&mut self, response: Response) {
        self.response = Some(response);
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Whether the recorded response is exactly the set of correct options.
    ///
    /// Open questions are never auto-graded and always return `false`.
    pub fn is_correct(&self) -> bool {
        match (&self.kind, &self.response) {
            (QuestionKind::MultipleChoice { correct, .. }, Some(Response::Choices(chosen))) => {
                chosen == correct
            }
            (QuestionKind::MultipleChoice { .. }, _) => false,
            (QuestionKind::Open { .. }, _) => false,
        }
    }

    /// Markdown rendering used by exam documents
    pub fn to_display_text(&self) -> String {
        let mut text = format!("{}\n\n ", self.text);
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => {
                for option in options {
                    text.push_str(&format!("[ ] {}\n\n", option));
                }
            }
            QuestionKind::Open { .. } => {}
        }
        text
    }

    /// Letter label for an option index (`0` → `a`)
    ///
    /// Indices at or above [`Question::MAX_OPTIONS`] wrap around.
    pub fn option_label(index: usize) -> char {
        char::from(b'a' + (index % Self::MAX_OPTIONS) as u8)
    }

    /// Move the first option equal to `option` to the end of the list.
    ///
    /// Correct indices are remapped so that they keep pointing at the same
    /// option text. Returns `false` if the option is not present.
    pub fn move_option_to_end(&mut self, option: &str) -> bool {
        let QuestionKind::MultipleChoice { options, correct } = &mut self.kind else {
            return false;
        };
        let Some(position) = options.iter().position(|o| o == option) else {
            return false;
        };

        let last = options.len() - 1;
        let moved = options.remove(position);
        options.push(moved);

        *correct = correct
            .iter()
            .map(|&i| match i.cmp(&position) {
                std::cmp::Ordering::Equal => last,
                std::cmp::Ordering::Greater => i - 1,
                std::cmp::Ordering::Less => i,
            })
            .collect();
        true
    }
}
