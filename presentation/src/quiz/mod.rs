//! Terminal quiz over generated multiple-choice questions

pub mod runner;

pub use runner::{QuizRunner, QuizScore};
