//! OpenAI-compatible completion adapter
//!
//! Implements CompletionService for any endpoint speaking the
//! `/v1/chat/completions` protocol.

pub mod client;
pub mod error;
pub mod payload;
