//! Application-level configuration.
//!
//! - [`GenerationParams`]: generation loop control (sentinel, retry budget)

pub mod generation_params;

pub use generation_params::GenerationParams;
