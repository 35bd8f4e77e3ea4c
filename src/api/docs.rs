use axum::Json;
use utoipa::OpenApi;

use crate::assistant::{BridgeOutcome, ChatMessage, ChatRole};
use crate::types::{
    ChatRequest, ChatResponse, ContentResponse, FeaturesInfo, HealthResponse, LanguageInfo,
    MatcherRequest, MatcherResponse, PriceView, RateView, ReservationRequest, ReservationResponse,
    RoomView, RoomsResponse,
};

/// OpenAPI document of the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "K-House 71 Site API",
        description = "Content catalog, AI room matcher and chatbot, and mock reservations of the K-House 71 site."
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "content", description = "Languages, content trees, rooms and rates"),
        (name = "assistant", description = "AI room matcher and chatbot"),
        (name = "reservation", description = "Mock reservation requests")
    ),
    paths(
        crate::api::handlers::health::health,
        crate::api::handlers::content::languages,
        crate::api::handlers::content::content,
        crate::api::handlers::content::rooms,
        crate::api::handlers::content::rates,
        crate::api::handlers::assistant::matcher_api,
        crate::api::handlers::assistant::chat_api,
        crate::api::handlers::reservation::reservation_api,
    ),
    components(schemas(
        HealthResponse,
        FeaturesInfo,
        LanguageInfo,
        ContentResponse,
        RoomView,
        RoomsResponse,
        PriceView,
        RateView,
        MatcherRequest,
        MatcherResponse,
        ChatRequest,
        ChatResponse,
        ChatMessage,
        ChatRole,
        BridgeOutcome,
        ReservationRequest,
        ReservationResponse,
    ))
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_json_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/languages",
            "/api/content/{lang}",
            "/api/rooms",
            "/api/rates",
            "/api/matcher",
            "/api/chat",
            "/api/reservation",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
