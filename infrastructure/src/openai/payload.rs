//! Wire types for `/v1/chat/completions` and the decoding of replies.

use super::error::{OpenAiError, Result};
use exam_domain::FunctionSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<Value>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Single user message, free-text reply
    pub fn text(model: &'a str, prompt: &'a str, temperature: Option<f32>) -> Self {
        Self {
            model,
            messages: vec![ChatMessage::user(prompt)],
            temperature,
            tools: Vec::new(),
            tool_choice: None,
        }
    }

    /// Single user message, reply forced through the function in `schema`
    pub fn structured(
        model: &'a str,
        prompt: &'a str,
        temperature: Option<f32>,
        schema: &FunctionSchema,
    ) -> Self {
        Self {
            tools: vec![tool_definition(schema)],
            tool_choice: Some(json!({
                "type": "function",
                "function": { "name": schema.name },
            })),
            ..Self::text(model, prompt, temperature)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// Convert a [`FunctionSchema`] into an OpenAI `tools` entry.
///
/// Every parameter is a JSON string property.
pub fn tool_definition(schema: &FunctionSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in &schema.parameters {
        properties.insert(
            param.name.clone(),
            json!({ "type": "string", "description": param.description }),
        );
        if param.required {
            required.push(json!(param.name));
        }
    }

    json!({
        "type": "function",
        "function": {
            "name": schema.name,
            "description": schema.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        }
    })
}

/// Response body for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageOut {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object
    pub arguments: String,
}

impl ChatCompletionResponse {
    /// Text of the first choice that has any
    pub fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(OpenAiError::EmptyChoices)
    }

    /// Decoded arguments of the first choice's first call to `function`
    pub fn into_arguments(self, function: &str) -> Result<HashMap<String, String>> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyChoices)?;

        let call = choice
            .message
            .tool_calls
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::MissingToolCall(function.to_string()))?;

        if call.function.name != function {
            return Err(OpenAiError::InvalidArguments(format!(
                "model called `{}` instead of `{}`",
                call.function.name, function
            )));
        }

        decode_arguments(&call.function.arguments)
    }
}

/// Decode a JSON argument object whose values are all strings
pub fn decode_arguments(arguments: &str) -> Result<HashMap<String, String>> {
    let value: Value = serde_json::from_str(arguments)?;
    let Value::Object(map) = value else {
        return Err(OpenAiError::InvalidArguments(
            "arguments are not a JSON object".to_string(),
        ));
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(OpenAiError::InvalidArguments(format!(
                "argument `{}` is not a string: {}",
                key, other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_structured_request_forces_named_tool() {
        let schema = FunctionSchema::extract_questions();
        let request = ChatCompletionRequest::structured("gpt-4o", "prompt", Some(0.0), &schema);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "prompt");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["tool_choice"]["function"]["name"], "extract_questions");
        assert_eq!(body["tools"][0]["type"], "function");
        let parameters = &body["tools"][0]["function"]["parameters"];
        assert_eq!(parameters["properties"]["questions"]["type"], "string");
        assert_eq!(parameters["required"][0], "questions");
    }

    #[test]
    fn test_text_request_omits_tools() {
        let request = ChatCompletionRequest::text("gpt-4o", "prompt", None);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_into_text() {
        let out = response(r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#);
        assert_eq!(out.into_text().unwrap(), "hello");
    }

    #[test]
    fn test_into_text_empty_choices() {
        let out = response(r#"{"choices":[]}"#);
        assert!(matches!(out.into_text(), Err(OpenAiError::EmptyChoices)));
    }

    #[test]
    fn test_into_arguments() {
        let out = response(
            r#"{"choices":[{"message":{"content":null,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"extract_questions","arguments":"{\"questions\":\"A?#B?\"}"}}]}}]}"#,
        );
        let args = out.into_arguments("extract_questions").unwrap();
        assert_eq!(args.get("questions").map(String::as_str), Some("A?#B?"));
    }

    #[test]
    fn test_free_text_reply_is_missing_tool_call() {
        let out = response(r#"{"choices":[{"message":{"content":"A?#B?"}}]}"#);
        assert!(matches!(
            out.into_arguments("extract_questions"),
            Err(OpenAiError::MissingToolCall(_))
        ));
    }

    #[test]
    fn test_wrong_function_name_rejected() {
        let out = response(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"other","arguments":"{}"}}]}}]}"#,
        );
        assert!(matches!(
            out.into_arguments("extract_questions"),
            Err(OpenAiError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_decode_arguments_rejects_non_string_values() {
        assert!(matches!(
            decode_arguments(r#"{"questions": ["A?", "B?"]}"#),
            Err(OpenAiError::InvalidArguments(_))
        ));
        assert!(matches!(
            decode_arguments(r#""just text""#),
            Err(OpenAiError::InvalidArguments(_))
        ));
        assert!(matches!(
            decode_arguments("not json"),
            Err(OpenAiError::Serialization(_))
        ));
    }
}
