//! Exam subdomain: how generated questions are distributed over exam copies.

pub mod entities;

pub use entities::{Exam, ExamLayout};
