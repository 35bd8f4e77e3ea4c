use crate::api::handlers::{assistant, content, gallery, health, pages, reservation};
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Server-rendered page routes.
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/language", post(pages::set_language))
        .route("/promotion/dismiss", post(pages::dismiss_promotion))
        // Gallery
        .route("/rooms/{id}/gallery", get(gallery::open))
        .route("/rooms/{id}/gallery/next", post(gallery::next))
        .route("/rooms/{id}/gallery/prev", post(gallery::previous))
        .route("/rooms/gallery/close", post(gallery::close))
        // AI widgets
        .route(
            "/matcher",
            get(assistant::open_matcher).post(assistant::submit_matcher),
        )
        .route("/matcher/close", post(assistant::close_matcher))
        .route(
            "/chat",
            get(assistant::open_chat).post(assistant::submit_chat),
        )
        .route("/chat/close", post(assistant::close_chat))
        // Reservation
        .route(
            "/reservation",
            get(reservation::open).post(reservation::submit),
        )
        .route("/reservation/close", post(reservation::close))
}

/// JSON routes, nested under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/languages", get(content::languages))
        .route("/content/{lang}", get(content::content))
        .route("/rooms", get(content::rooms))
        .route("/rates", get(content::rates))
        .route("/matcher", post(assistant::matcher_api))
        .route("/chat", post(assistant::chat_api))
        .route("/reservation", post(reservation::reservation_api))
}
