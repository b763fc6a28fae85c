//! Multiple-choice block parsing.
//!
//! Expected model output, one candidate block per question:
//!
//! ```text
//! 1. What is 2+2?
//! a) 3
//! Correct:b) 4
//! c) 5
//!
//! 2. ...
//! ```

use super::marker::MarkerDetector;
use super::sanitize::{strip_option_letter, strip_ordinal};
use crate::question::Question;

/// Result of parsing one model reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBatch {
    /// Retained questions, ids assigned consecutively from the start id
    pub questions: Vec<Question>,
    /// Candidate blocks dropped because no usable question could be built
    pub discarded: usize,
}

/// Parse a reply into multiple-choice questions, numbering them from `start_id`.
///
/// Blocks without a marked answer are discarded; see
/// [`parse_multiple_choice_batch`] to also get the discard count.
pub fn parse_multiple_choice_block(
    response: &str,
    start_id: usize,
    marker: &dyn MarkerDetector,
) -> Vec<Question> {
    parse_multiple_choice_batch(response, start_id, marker).questions
}

/// Parse a reply into multiple-choice questions and count discarded blocks.
///
/// 1. The reply is split into candidate blocks on blank lines.
/// 2. The first line of a block is the question, with its ordinal stripped.
/// 3. The remaining lines are options, with their letter stripped.
/// 4. Every option containing the marker is a correct answer.
/// 5. A block with no marked option is discarded; it cannot be scored.
///
/// Discarded blocks do not consume an id.
pub fn parse_multiple_choice_batch(
    response: &str,
    start_id: usize,
    marker: &dyn MarkerDetector,
) -> ParsedBatch {
    let normalized = response.replace("\r\n", "\n");
    let mut batch = ParsedBatch::default();
    let mut next_id = start_id;

    for block in normalized.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let mut lines = block.lines();
        let Some(first_line) = lines.next() else {
            continue;
        };
        let text = strip_ordinal(first_line);

        let mut options = Vec::new();
        let mut correct = Vec::new();
        for line in lines.filter(|l| !l.trim().is_empty()) {
            if marker.is_marked(line) {
                correct.push(options.len());
                options.push(strip_option_letter(&marker.strip(line)));
            } else {
                options.push(strip_option_letter(line));
            }
        }

        if correct.is_empty() {
            batch.discarded += 1;
            continue;
        }

        match Question::multiple_choice(next_id, text, options, correct) {
            Ok(question) => {
                batch.questions.push(question);
                next_id += 1;
            }
            Err(_) => batch.discarded += 1,
        }
    }

    batch
}
