//! OpenAI-compatible completion client
//!
//! Implements [`CompletionService`] over `POST {endpoint}/v1/chat/completions`.
//! Free-text calls read `choices[0].message.content`; structured calls force
//! the single function of the schema and decode
//! `choices[0].message.tool_calls[0].function.arguments`.

use super::error::{OpenAiError, Result};
use super::payload::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use exam_application::{CompletionError, CompletionService};
use exam_domain::FunctionSchema;
use reqwest::header;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Settings for [`OpenAiCompletionService`]
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

impl OpenAiSettings {
    /// Build settings from the `[provider]` section, reading the API key
    /// from the configured environment variable
    pub fn from_config(config: &FileProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| OpenAiError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            temperature: Some(config.temperature),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// Thin client for an OpenAI-compatible chat completions API
#[derive(Debug)]
pub struct OpenAiCompletionService {
    client: reqwest::Client,
    model: String,
    temperature: Option<f32>,
    url_chat: String,
}

impl OpenAiCompletionService {
    /// Create a client with bearer auth and a request timeout.
    ///
    /// The endpoint must use http or https.
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        let endpoint = settings.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(OpenAiError::InvalidEndpoint(settings.endpoint.clone()));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
                .map_err(|e| OpenAiError::InvalidArguments(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()?;

        let url_chat = chat_url(endpoint);

        info!(
            model = %settings.model,
            url = %url_chat,
            timeout_secs = settings.timeout.as_secs(),
            "OpenAI completion client initialized"
        );

        Ok(Self {
            client,
            model: settings.model,
            temperature: settings.temperature,
            url_chat,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post(&self, body: &ChatCompletionRequest<'_>) -> Result<ChatCompletionResponse> {
        let started = Instant::now();
        debug!(model = %self.model, tools = body.tools.len(), "POST {}", self.url_chat);

        let resp = self.client.post(&self.url_chat).json(body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let err = OpenAiError::status(status.as_u16(), self.url_chat.clone(), &text);
            error!(
                %status,
                model = %self.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );
            return Err(err);
        }

        let text = resp.text().await?;
        let out: ChatCompletionResponse = serde_json::from_str(&text)?;

        debug!(
            model = %self.model,
            latency_ms = started.elapsed().as_millis(),
            "chat completion finished"
        );
        Ok(out)
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, CompletionError> {
        let body = ChatCompletionRequest::text(&self.model, prompt, self.temperature);
        let reply = self.post(&body).await?.into_text()?;
        Ok(reply)
    }

    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &FunctionSchema,
    ) -> std::result::Result<HashMap<String, String>, CompletionError> {
        let body = ChatCompletionRequest::structured(&self.model, prompt, self.temperature, schema);
        let arguments = self.post(&body).await?.into_arguments(&schema.name)?;
        Ok(arguments)
    }
}

fn chat_url(endpoint: &str) -> String {
    format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
}
