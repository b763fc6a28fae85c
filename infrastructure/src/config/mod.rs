//! Configuration file loading for exam-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXAM_`-prefixed environment variables (`EXAM_PROVIDER__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./exam.toml` or `./.exam.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/exam-generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileExamConfig, FileGenerationConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;
