//! Read-only views of the content catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use khouse_content::{
    direction_for, Catalog, LanguageCode, Rate, LANGUAGE_OPTIONS, RATES, ROOM_CARDS,
};

use crate::types::{
    ContentResponse, LangQuery, LanguageInfo, PriceView, RateView, RoomView, RoomsResponse,
};
use crate::AppState;

// ============= Languages =============

/// Supported languages
#[utoipa::path(
    get,
    path = "/api/languages",
    responses(
        (status = 200, description = "Languages in selector order", body = Vec<LanguageInfo>)
    ),
    tag = "content"
)]
pub async fn languages() -> Json<Vec<LanguageInfo>> {
    Json(
        LANGUAGE_OPTIONS
            .iter()
            .map(|option| LanguageInfo {
                code: option.code.as_str().to_string(),
                label: option.label.to_string(),
                full_label: option.full_label.to_string(),
                direction: option.code.direction().as_str().to_string(),
                html_lang: option.code.html_lang().to_string(),
            })
            .collect(),
    )
}

// ============= Content =============

/// Content tree of a language. Unknown codes answer the English tree.
#[utoipa::path(
    get,
    path = "/api/content/{lang}",
    params(("lang" = String, Path, description = "Language code")),
    responses(
        (status = 200, description = "Resolved content tree", body = ContentResponse)
    ),
    tag = "content"
)]
pub async fn content(Path(code): Path<String>) -> Json<ContentResponse> {
    let parsed = code.parse::<LanguageCode>();
    let fallback = parsed.is_err();
    let lang = parsed.unwrap_or(LanguageCode::FALLBACK);

    Json(ContentResponse {
        language: lang.as_str().to_string(),
        direction: direction_for(&code).as_str().to_string(),
        fallback,
        content: Catalog::get(lang),
    })
}

// ============= Rooms =============

/// Room cards joined with their localized titles and features
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(LangQuery),
    responses(
        (status = 200, description = "Room cards", body = RoomsResponse)
    ),
    tag = "content"
)]
pub async fn rooms(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<RoomsResponse> {
    let lang = match query.lang.as_deref() {
        Some(code) => LanguageCode::parse_or_fallback(code),
        None => state.config.config().site.default_language(),
    };
    let t = lang.content();

    let rooms = ROOM_CARDS
        .iter()
        .zip(t.rooms.types)
        .map(|(card, room)| RoomView {
            id: card.id,
            title: room.title.to_string(),
            size: card.size.to_string(),
            start_price: card.start_price.to_string(),
            features: room.features.iter().map(|f| f.to_string()).collect(),
            images: card.images.iter().map(|i| i.to_string()).collect(),
            hot_promo: card.hot_promo,
        })
        .collect();

    Json(RoomsResponse {
        language: lang.as_str().to_string(),
        rooms,
    })
}

// ============= Rates =============

fn price(rate: &Rate) -> PriceView {
    PriceView {
        old: rate.old.to_string(),
        new: rate.new.to_string(),
    }
}

/// Rate table rows, monthly prices in baht
#[utoipa::path(
    get,
    path = "/api/rates",
    responses(
        (status = 200, description = "Rate rows", body = Vec<RateView>)
    ),
    tag = "content"
)]
pub async fn rates() -> Json<Vec<RateView>> {
    Json(
        RATES
            .iter()
            .map(|row| RateView {
                name: row.name.to_string(),
                size: row.size.to_string(),
                one_year: price(&row.rates.y1),
                six_months: price(&row.rates.m6),
                three_months: row.rates.m3.as_ref().map(price),
            })
            .collect(),
    )
}
