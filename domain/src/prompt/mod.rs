//! Prompt domain
//!
//! Prompt templates and the function schema used for structured completions.

pub mod schema;
mod template;

pub use schema::{FunctionParameter, FunctionSchema, ITEM_DELIMITER, QUESTIONS_FIELD};
pub use template::PromptTemplate;
