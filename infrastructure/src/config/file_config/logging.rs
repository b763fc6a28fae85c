//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file in addition to stderr
    pub file: Option<String>,
    /// Record every prompt and reply to this JSONL file
    pub transcript: Option<String>,
}
