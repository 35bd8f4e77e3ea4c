//! Request/response adapter between the widgets and the LLM client.

use crate::assistant::prompts::Widget;
use crate::llm::{LLMClient, LLMResponse, OfflineClient, Provider};
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

/// Shown when the backend answered without any text.
pub const PLACEHOLDER: &str = "Please try again.";

/// How a question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BridgeOutcome {
    /// The model's text, verbatim
    Answer,
    /// The response had no text
    Placeholder,
    /// Transport or decoding failure
    Failure,
}

/// Text to display for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeReply {
    pub text: String,
    pub outcome: BridgeOutcome,
}

/// One outbound call per question, no retry.
#[derive(Clone)]
pub struct AiBridge {
    client: Arc<dyn LLMClient>,
    provider: &'static str,
}

impl AiBridge {
    pub fn new(client: Arc<dyn LLMClient>, provider: &'static str) -> Self {
        Self { client, provider }
    }

    /// Build the bridge for a provider.
    pub fn from_provider(provider: &Provider) -> Result<Self> {
        let client = provider.create_client()?;
        Ok(Self::new(Arc::from(client), provider.name()))
    }

    /// A bridge that answers every question with the failure message.
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineClient), Provider::Offline.name())
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Send a question with the widget's system prompt.
    ///
    /// Returns `None` without calling the backend when the input is blank.
    /// Never fails: errors become the widget's failure message.
    #[instrument(skip(self, widget, input), fields(widget = widget.name(), provider = self.provider))]
    pub async fn ask(&self, widget: Widget, input: &str) -> Option<BridgeReply> {
        if input.trim().is_empty() {
            return None;
        }

        let reply = match self
            .client
            .generate_with_system(widget.system_prompt(), input)
            .await
        {
            Ok(LLMResponse {
                content: Some(text),
                ..
            }) => BridgeReply {
                text,
                outcome: BridgeOutcome::Answer,
            },
            Ok(response) => {
                debug!(finish_reason = ?response.finish_reason, "Response carried no text");
                BridgeReply {
                    text: PLACEHOLDER.to_string(),
                    outcome: BridgeOutcome::Placeholder,
                }
            }
            Err(e) => {
                warn!(error = %e, "AI bridge call failed");
                BridgeReply {
                    text: widget.failure_message().to_string(),
                    outcome: BridgeOutcome::Failure,
                }
            }
        };

        Some(reply)
    }
}
