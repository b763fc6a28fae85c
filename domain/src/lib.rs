//! Domain layer for exam-generator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions
//!
//! - **Multiple choice**: options plus one or more correct indices, scored by
//!   exact set comparison
//! - **Open**: free-form prompt, optionally with rephrased variations
//!
//! ## Parsing
//!
//! Model replies are semi-structured text. The parser sanitizes numbering,
//! detects the correct-answer marker and drops candidates that cannot be
//! scored.

pub mod config;
pub mod core;
pub mod exam;
pub mod parsing;
pub mod prompt;
pub mod question;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use exam::{Exam, ExamLayout};
pub use parsing::{
    MarkerDetector, ParsedBatch, SentinelMarker, parse_multiple_choice_batch,
    parse_multiple_choice_block, split_delimited,
};
pub use prompt::{FunctionParameter, FunctionSchema, PromptTemplate};
pub use question::{GenerationRequest, Question, QuestionKind, QuestionType, Response};
