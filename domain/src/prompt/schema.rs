//! Function-calling schema for structured completions.
//!
//! Structured completions force the model to call one named function whose
//! arguments are all strings. Serialization to the provider's JSON Schema
//! format lives in the infrastructure layer.

use serde::{Deserialize, Serialize};

/// Name of the argument carrying the `#`-joined item list
pub const QUESTIONS_FIELD: &str = "questions";

/// Separator between items inside [`QUESTIONS_FIELD`]
pub const ITEM_DELIMITER: char = '#';

/// Definition of a function the model is asked to call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: Vec<FunctionParameter>,
}

/// A string parameter of a [`FunctionSchema`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl FunctionSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: FunctionParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// The `extract_questions` function used for open questions and variations
    pub fn extract_questions() -> Self {
        Self::new(
            "extract_questions",
            "Get the questions as a list (without the question number) from the body of the input text",
        )
        .with_parameter(FunctionParameter::new(
            QUESTIONS_FIELD,
            "The list of questions WITHOUT the question number, WITHOUT newline, SEPARATED by #",
            true,
        ))
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &FunctionParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl FunctionParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_questions_has_single_required_string() {
        let schema = FunctionSchema::extract_questions();
        assert_eq!(schema.name, "extract_questions");
        let required: Vec<_> = schema.required_parameters().collect();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].name, QUESTIONS_FIELD);
        assert!(required[0].description.contains("SEPARATED by #"));
    }
}
