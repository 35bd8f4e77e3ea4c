use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use khouse_content::ContentTree;

use crate::assistant::{BridgeOutcome, ChatMessage};

// ============= Catalog Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LanguageInfo {
    pub code: String,
    pub label: String,
    pub full_label: String,
    /// `ltr` or `rtl`
    pub direction: String,
    pub html_lang: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentResponse {
    pub language: String,
    pub direction: String,
    /// True when the requested code was not recognized and English was served
    pub fallback: bool,
    #[schema(value_type = Object)]
    pub content: &'static ContentTree,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomView {
    pub id: u32,
    pub title: String,
    pub size: String,
    pub start_price: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub hot_promo: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomsResponse {
    pub language: String,
    pub rooms: Vec<RoomView>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PriceView {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RateView {
    pub name: String,
    pub size: String,
    pub one_year: PriceView,
    pub six_months: PriceView,
    pub three_months: Option<PriceView>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct LangQuery {
    /// Language code; unknown or missing codes fall back
    pub lang: Option<String>,
}

// ============= Page Form Types =============

/// Body of the language switcher forms.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
}

/// Where to go after dismissing the promotion toast.
#[derive(Debug, Deserialize)]
pub struct DismissQuery {
    /// `rooms` jumps to the rate table
    pub to: Option<String>,
}

// ============= Assistant Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MatcherRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MatcherResponse {
    /// Text to display: the model answer or a fixed fallback message
    pub result: String,
    pub outcome: BridgeOutcome,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Assistant reply for this message
    pub reply: String,
    pub outcome: BridgeOutcome,
    /// Whole session log, oldest first
    pub messages: Vec<ChatMessage>,
}

// ============= Reservation Types =============

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReservationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Room card id
    #[serde(default)]
    pub room_type: String,
    /// ISO date, e.g. 2026-11-01
    #[serde(default)]
    pub move_in: String,
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub ticket: Uuid,
    pub status: String,
}

// ============= Health =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the AI provider, `offline` when no key is configured
    pub ai: String,
    pub features: FeaturesInfo,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeaturesInfo {
    pub room_matcher: bool,
    pub chatbot: bool,
    pub reservation: bool,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, body) = match self {
            AppError::MissingFields(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": "Missing required fields",
                    "fields": fields,
                }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Busy(msg) => (StatusCode::CONFLICT, serde_json::json!({ "error": msg })),
            AppError::Session(msg)
            | AppError::LLM(msg)
            | AppError::Config(msg)
            | AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Busy("x".into()), StatusCode::CONFLICT),
            (AppError::Session("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::MissingFields(vec!["name".into()]),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_missing_fields_message() {
        let err = AppError::MissingFields(vec!["name".into(), "email".into()]);
        assert_eq!(err.to_string(), "Missing required fields: name, email");
    }
}
