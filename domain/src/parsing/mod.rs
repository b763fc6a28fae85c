//! Response parsing for question generation.
//!
//! These functions turn free-form model replies into [`Question`] records.
//! They do no I/O and tolerate models that ignore formatting instructions.
//!
//! # Functions
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`parse_multiple_choice_block`] | Blank-line separated questions with marked answers | Multiple-choice questions |
//! | [`split_delimited`] | `#`-joined structured payload | Item texts |
//! | [`strip_ordinal`] / [`strip_option_letter`] | Single line | Line without numbering |
//!
//! [`Question`]: crate::question::Question

pub mod delimited;
pub mod marker;
pub mod multiple_choice;
pub mod sanitize;

pub use delimited::split_delimited;
pub use marker::{MarkerDetector, SentinelMarker};
pub use multiple_choice::{ParsedBatch, parse_multiple_choice_batch, parse_multiple_choice_block};
pub use sanitize::{strip_option_letter, strip_ordinal};
