use crate::types::{FeaturesInfo, HealthResponse};
use crate::AppState;
use axum::{extract::State, Json};

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let features = state.config.config().site.features;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai: state.bridge.provider_name().to_string(),
        features: FeaturesInfo {
            room_matcher: features.room_matcher,
            chatbot: features.chatbot,
            reservation: features.reservation,
        },
    })
}
