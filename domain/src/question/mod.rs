//! Question subdomain: the canonical record, generation requests and the
//! post-generation option ordering rule.

pub mod entities;
pub mod reorder;
pub mod request;

pub use entities::{Question, QuestionKind, QuestionType, Response};
pub use reorder::{ALL_OF_THE_ABOVE, NONE_OF_THE_ABOVE, move_catch_all_options_last};
pub use request::GenerationRequest;
