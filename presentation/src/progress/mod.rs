//! Progress display for long-running generation

pub mod reporter;
