//! Shared helpers for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::{TestServer, TestServerConfig};
use khouse::llm::{LLMClient, LLMResponse};
use khouse::types::{AppError, Result};
use khouse::utils::toml_config::FeatureConfig;
use khouse::{create_app, AiBridge, AppState, KHouseConfig, KHouseConfigManager};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============= Scripted LLM Client =============

/// LLM client with a fixed answer, optional latency and a call counter.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    reply: Option<String>,
    fail: bool,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedClient {
    pub fn answering(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMClient for ScriptedClient {
    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<LLMResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(AppError::LLM("scripted failure".to_string()));
        }
        Ok(LLMResponse {
            content: self.reply.clone(),
            finish_reason: Some("STOP".to_string()),
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

// ============= Test Servers =============

/// Configuration with no artificial delays.
pub fn test_config(features: FeatureConfig) -> KHouseConfig {
    let mut config = KHouseConfig::default();
    config.site.features = features;
    config.site.reservation_delay_ms = 0;
    config
}

/// Server that keeps the session cookie between requests.
pub fn server_with(config: KHouseConfig, bridge: AiBridge) -> TestServer {
    let session = config.session.clone();
    let state = AppState::new(KHouseConfigManager::from_config(config), bridge);
    let app = create_app(state, &session);

    let server_config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, server_config).expect("Failed to create test server")
}

pub fn server(client: ScriptedClient) -> TestServer {
    server_with(
        test_config(FeatureConfig::default()),
        AiBridge::new(Arc::new(client), "scripted"),
    )
}

pub fn offline_server() -> TestServer {
    server_with(test_config(FeatureConfig::default()), AiBridge::offline())
}
