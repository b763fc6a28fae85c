//! Output formatting for generated exams

pub mod console;
pub mod formatter;
pub mod markdown;
