//! # K-House 71 site server
//!
//! Server-rendered brochure site of the K-House 71 serviced apartments in
//! Bangkok: five languages (Arabic right-to-left), room cards with a
//! circular photo gallery, a rate table, an AI room matcher and chatbot
//! backed by Gemini, and a mock reservation form.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a standalone server** - run the `khouse-server` binary
//! 2. **As a library** - build the router with [`create_app`] and mount it
//!    in another service or a test
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use khouse::{create_app, AiBridge, AppState, KHouseConfig, KHouseConfigManager};
//!
//! let config = KHouseConfig::default();
//! let session = config.session.clone();
//! let state = AppState::new(KHouseConfigManager::from_config(config), AiBridge::offline());
//!
//! let app = create_app(state, &session);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - page and JSON routes
//! - [`site`] - HTML rendering
//! - [`session`] - per-visitor state
//! - [`assistant`] - AI bridge, room matcher and chat state
//! - [`llm`] - Gemini client
//! - [`gallery`], [`reservation`] - widget state machines
//! - [`utils`] - configuration with hot reload
//!
//! All page text comes from the `khouse-content` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP routes and handlers.
pub mod api;
/// Embedded stylesheet and images.
pub mod assets;
/// AI bridge and widget state.
pub mod assistant;
/// Command line interface.
pub mod cli;
/// Room gallery state.
pub mod gallery;
/// LLM clients.
pub mod llm;
/// Mock reservation form.
pub mod reservation;
/// Per-visitor session state.
pub mod session;
/// Server-side HTML rendering.
pub mod site;
/// Request/response types and errors.
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use assistant::{AiBridge, BridgeOutcome, BridgeReply, InFlight, Widget};
pub use llm::{LLMClient, LLMClientFactory, LLMResponse, Provider};
pub use types::{AppError, Result};
pub use utils::toml_config::{KHouseConfig, KHouseConfigManager};

use axum::{routing::get, Router};
use session::{IdleMap, VisitorSessionStore, VisitorStates};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{cookie::time::Duration, Expiry, SessionManagerLayer};
use utils::toml_config::SessionConfig;

/// Largest accepted request body. Forms and JSON questions are small.
const BODY_LIMIT: usize = 64 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TOML configuration with hot-reload support
    pub config: Arc<KHouseConfigManager>,
    /// Bridge to the AI backend
    pub bridge: AiBridge,
    /// Pending questions per visitor and widget
    pub inflight: InFlight,
    /// Widget state per visitor id
    pub visitors: Arc<VisitorStates>,
    /// Session records, holding only the visitor id
    pub sessions: VisitorSessionStore,
}

impl AppState {
    /// State with no visitors and no question pending.
    ///
    /// The visitor cap and idle timeout are read once from `[session]`.
    pub fn new(config: KHouseConfigManager, bridge: AiBridge) -> Self {
        let session = config.config().session.clone();
        let idle = session.idle_timeout();
        Self {
            config: Arc::new(config),
            bridge,
            inflight: InFlight::new(),
            visitors: Arc::new(IdleMap::new(session.max_visitors, idle)),
            sessions: VisitorSessionStore::new(session.max_visitors, idle),
        }
    }

    /// Spawn a task dropping idle visitors and sessions every `period`.
    pub fn spawn_cleanup(&self, period: std::time::Duration) -> JoinHandle<()> {
        let visitors = Arc::clone(&self.visitors);
        let sessions = self.sessions.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let dropped_visitors = visitors.cleanup_expired();
                let dropped_sessions = sessions.cleanup_expired();
                if dropped_visitors + dropped_sessions > 0 {
                    tracing::debug!(
                        dropped_visitors,
                        dropped_sessions,
                        remaining = visitors.len(),
                        "Dropped idle visitors"
                    );
                }
            }
        })
    }
}

/// Build the full router: pages, JSON API, docs, static assets and the
/// session layer.
///
/// Sessions live in memory and are dropped after `idle_minutes` without a
/// request, or earliest-idle first once `max_visitors` is reached.
pub fn create_app(state: AppState, session: &SessionConfig) -> Router {
    let session_layer = SessionManagerLayer::new(state.sessions.clone())
        .with_name(session.cookie_name.clone())
        .with_secure(session.secure)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(session.idle_minutes)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .merge(api::routes::page_router())
        .nest("/api", api::routes::api_router())
        .route("/static/{*path}", get(assets::serve_static));

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            <api::docs::ApiDoc as utoipa::OpenApi>::openapi(),
        ),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route("/api-docs/openapi.json", get(api::docs::openapi_json));

    router
        .with_state(state)
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
