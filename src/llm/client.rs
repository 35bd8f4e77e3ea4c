//! LLM client abstraction and provider selection
//!
//! The site talks to exactly one text-generation backend:
//! - **Gemini**: Google's `generateContent` endpoint
//! - **Offline**: used when the AI is disabled or no API key is configured;
//!   every call fails so callers show their fixed failure message

use crate::types::{AppError, Result};
use crate::utils::toml_config::AiConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion for `prompt` under the `system` instruction
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<LLMResponse>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Response from an LLM generation request
///
/// A request that completed but whose body did not carry an answer has
/// `content == None`; transport and decoding failures are errors instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LLMResponse {
    /// The text content of the response, if the response had one
    pub content: Option<String>,
    /// The reason generation stopped (e.g., "STOP", "SAFETY")
    pub finish_reason: Option<String>,
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini API
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Gemini {
    ///     api_key: "AIza...".to_string(),
    ///     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
    ///     model: "gemini-2.5-flash-preview-09-2025".to_string(),
    ///     timeout: None,
    /// };
    /// ```
    Gemini {
        api_key: String,
        api_base: String,
        model: String,
        /// No timeout when `None`
        timeout: Option<Duration>,
    },

    /// No backend; every generation fails
    Offline,
}

impl Provider {
    /// Pick the provider described by the `[ai]` section
    ///
    /// Falls back to [`Provider::Offline`] when the AI is disabled or the key
    /// is missing, so a site without a key still renders and answers every
    /// question with the failure message.
    pub fn from_config(ai: &AiConfig, api_key: Option<String>) -> Self {
        match api_key {
            Some(api_key) if ai.enabled => Provider::Gemini {
                api_key,
                api_base: ai.api_base.clone(),
                model: ai.model.clone(),
                timeout: ai.timeout_secs.map(Duration::from_secs),
            },
            _ => Provider::Offline,
        }
    }

    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::Gemini {
                api_key,
                api_base,
                model,
                timeout,
            } => Ok(Box::new(super::gemini::GeminiClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
                *timeout,
            )?)),

            Provider::Offline => Ok(Box::new(OfflineClient)),
        }
    }

    /// Check if this provider can answer questions
    pub fn is_online(&self) -> bool {
        matches!(self, Provider::Gemini { .. })
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini { .. } => "gemini",
            Provider::Offline => "offline",
        }
    }
}

/// Client used when no backend is configured
pub struct OfflineClient;

#[async_trait]
impl LLMClient for OfflineClient {
    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<LLMResponse> {
        Err(AppError::LLM("AI bridge is offline".to_string()))
    }

    fn model_name(&self) -> &str {
        "offline"
    }
}

/// Configuration-based client factory
///
/// # Example
///
/// ```rust,ignore
/// use khouse::llm::{LLMClientFactory, Provider};
///
/// let factory = LLMClientFactory::new(Provider::from_config(&config.ai, config.api_key()));
/// let client = factory.create_default()?;
/// ```
pub struct LLMClientFactory {
    default_provider: Provider,
}

impl LLMClientFactory {
    /// Create a new factory with the specified default provider
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Create a client using the default provider
    pub fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.default_provider.create_client()
    }

    /// Get a reference to the default provider
    pub fn default_provider(&self) -> &Provider {
        &self.default_provider
    }

    /// Check if the default provider can answer questions
    pub fn is_default_online(&self) -> bool {
        self.default_provider.is_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_config(enabled: bool) -> AiConfig {
        AiConfig {
            enabled,
            timeout_secs: Some(5),
            ..AiConfig::default()
        }
    }

    #[test]
    fn test_provider_from_config() {
        let provider = Provider::from_config(&ai_config(true), Some("key".to_string()));
        match provider {
            Provider::Gemini { model, timeout, .. } => {
                assert_eq!(model, "gemini-2.5-flash-preview-09-2025");
                assert_eq!(timeout, Some(Duration::from_secs(5)));
            }
            Provider::Offline => panic!("expected Gemini provider"),
        }
    }

    #[test]
    fn test_provider_offline_without_key_or_when_disabled() {
        assert!(!Provider::from_config(&ai_config(true), None).is_online());
        assert!(!Provider::from_config(&ai_config(false), Some("key".to_string())).is_online());
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(Provider::Offline.name(), "offline");
        let gemini = Provider::from_config(&ai_config(true), Some("k".to_string()));
        assert_eq!(gemini.name(), "gemini");
    }

    #[test]
    fn test_factory_default_provider() {
        let factory = LLMClientFactory::new(Provider::Offline);
        assert!(!factory.is_default_online());
        assert_eq!(factory.default_provider().name(), "offline");
    }

    #[tokio::test]
    async fn test_offline_client_always_fails() {
        let client = Provider::Offline.create_client().unwrap();
        assert_eq!(client.model_name(), "offline");

        let err = client.generate_with_system("system", "hello").await.unwrap_err();
        assert!(err.to_string().contains("offline"));
    }
}
