use crate::llm::client::{LLMClient, LLMResponse};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        api_base: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::LLM(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    async fn send(&self, request: &GenerateContentRequest<'_>) -> Result<LLMResponse> {
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the key
                let e = e.without_url();
                warn!(error = %e, "Gemini request failed");
                AppError::LLM(format!("Gemini request failed: {}", e))
            })?;

        // Status is not inspected: an error body simply has no answer in it
        let status = response.status();
        debug!(status = %status, "Received response from Gemini");

        let body: serde_json::Value = response.json().await.map_err(|e| {
            let e = e.without_url();
            warn!(status = %status, error = %e, "Gemini response was not JSON");
            AppError::LLM(format!("Failed to decode Gemini response: {}", e))
        })?;

        Ok(extract_response(&body))
    }
}

/// Read `candidates[0].content.parts[0].text` and the finish reason.
///
/// Missing pieces yield `None`; an empty text counts as missing.
fn extract_response(body: &serde_json::Value) -> LLMResponse {
    let content = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|text| text.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    let finish_reason = body
        .pointer("/candidates/0/finishReason")
        .and_then(|reason| reason.as_str())
        .map(str::to_string);

    LLMResponse {
        content,
        finish_reason,
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    #[instrument(skip(self, system, prompt), fields(model = %self.model))]
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<LLMResponse> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(system),
        };
        self.send(&request).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
