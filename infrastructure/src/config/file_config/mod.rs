//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod exam;
mod generation;
mod logging;
mod output;
mod provider;

pub use exam::FileExamConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;

use exam_domain::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("sentinel cannot be empty")]
    EmptySentinel,

    #[error("max_empty_attempts cannot be 0")]
    InvalidMaxAttempts,

    #[error("exam_count cannot be 0")]
    InvalidExamCount,

    #[error("answers_per_question must be between 1 and {max}, got {count}")]
    InvalidAnswerCount { count: usize, max: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint settings
    pub provider: FileProviderConfig,
    /// Generation loop settings
    pub generation: FileGenerationConfig,
    /// Exam layout settings
    pub exam: FileExamConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file and transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.generation.sentinel.trim().is_empty() {
            return Err(ConfigValidationError::EmptySentinel);
        }

        if self.generation.max_empty_attempts == 0 {
            return Err(ConfigValidationError::InvalidMaxAttempts);
        }

        if self.exam.exam_count == 0 {
            return Err(ConfigValidationError::InvalidExamCount);
        }

        let answers = self.generation.answers_per_question;
        if answers == 0 || answers > Question::MAX_OPTIONS {
            return Err(ConfigValidationError::InvalidAnswerCount {
                count: answers,
                max: Question::MAX_OPTIONS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
endpoint = "http://localhost:8080"
model = "gpt-4o-mini"
api_key_env = "LOCAL_KEY"
temperature = 0.3
timeout_seconds = 30

[generation]
sentinel = "[correct]"
max_empty_attempts = 3
answers_per_question = 5

[exam]
exam_count = 4
open_per_exam = 2

[output]
format = "json"
color = false

[logging]
file = "exam.log"
transcript = "transcript.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.endpoint, "http://localhost:8080");
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.api_key_env, "LOCAL_KEY");
        assert_eq!(config.provider.timeout_seconds, 30);
        assert_eq!(config.generation.sentinel, "[correct]");
        assert_eq!(config.generation.max_empty_attempts, 3);
        assert_eq!(config.generation.answers_per_question, 5);
        assert_eq!(config.exam.exam_count, 4);
        assert_eq!(config.exam.open_per_exam, Some(2));
        assert!(config.exam.multiple_choice_per_exam.is_none());
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.logging.file.as_deref(), Some("exam.log"));
        assert_eq!(
            config.logging.transcript.as_deref(),
            Some("transcript.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[provider]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.provider.endpoint, "https://api.openai.com");
        assert_eq!(config.generation.sentinel, "Correct:");
        assert_eq!(config.exam.exam_count, 1);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert_eq!(config.provider.temperature, 0.0);
        assert_eq!(config.generation.max_empty_attempts, 5);
        assert_eq!(config.generation.answers_per_question, 4);
        assert!(config.output.format.is_none());
        assert!(config.logging.transcript.is_none());
    }

    #[test]
    fn test_generation_params_from_config() {
        let config: FileConfig = toml::from_str(
            r#"
[generation]
sentinel = "*"
max_empty_attempts = 9
"#,
        )
        .unwrap();
        let params = config.generation.to_params();
        assert_eq!(params.sentinel, "*");
        assert_eq!(params.max_empty_attempts, 9);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[provider]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[provider]
model = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_empty_sentinel() {
        let mut config = FileConfig::default();
        config.generation.sentinel = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptySentinel));
    }

    #[test]
    fn test_validate_zero_attempts_and_exams() {
        let mut config = FileConfig::default();
        config.generation.max_empty_attempts = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxAttempts)
        );

        let mut config = FileConfig::default();
        config.exam.exam_count = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidExamCount));
    }

    #[test]
    fn test_validate_answer_count_fits_letter_labels() {
        let mut config = FileConfig::default();
        config.generation.answers_per_question = 26;
        assert!(config.validate().is_ok());

        config.generation.answers_per_question = 27;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidAnswerCount { count: 27, max: 26 })
        );

        config.generation.answers_per_question = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAnswerCount { count: 0, .. })
        ));
    }
}
