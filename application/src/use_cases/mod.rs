//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with external systems
//! through ports.

pub mod assemble_exams;
pub mod clarify_question;
pub mod generate_questions;
