//! Exam layout configuration from TOML (`[exam]` section)

use serde::{Deserialize, Serialize};

/// Per-exam quotas; `None` means "split the pool evenly".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExamConfig {
    pub exam_count: usize,
    pub open_per_exam: Option<usize>,
    pub multiple_choice_per_exam: Option<usize>,
}

impl Default for FileExamConfig {
    fn default() -> Self {
        Self {
            exam_count: 1,
            open_per_exam: None,
            multiple_choice_per_exam: None,
        }
    }
}
