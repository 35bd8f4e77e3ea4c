use axum::extract::{Form, Query, State};
use axum::response::Redirect;
use chrono::Datelike;
use khouse_content::LanguageCode;
use maud::Markup;
use tracing::debug;

use crate::session::Visitor;
use crate::site::{render_page, PageContext};
use crate::types::{DismissQuery, LangQuery, LanguageForm, Result};
use crate::AppState;

/// Collect everything the page shows for this visitor.
///
/// `requested` is an explicit language code from the query string; it is
/// remembered like a language switch.
pub(crate) async fn page_context(
    state: &AppState,
    visitor: &Visitor,
    requested: Option<&str>,
) -> Result<PageContext> {
    let config = state.config.config();
    let site = &config.site;

    let lang = visitor
        .resolve_language(requested, site.default_language())
        .await?;
    let mut ctx = PageContext::new(
        lang,
        site.features,
        site.promo_delay_ms,
        chrono::Utc::now().year(),
    );

    let snapshot = visitor.state().await?;
    ctx.show_promo = !snapshot.promo_dismissed;
    ctx.gallery = snapshot.gallery;
    if site.features.room_matcher {
        ctx.matcher = snapshot.matcher;
    }
    if site.features.chatbot {
        ctx.chat = snapshot.chat;
    }
    if site.features.reservation {
        ctx.reservation = snapshot.reservation;
    }
    Ok(ctx)
}

/// Render the page for the visitor's current state.
pub(crate) async fn render(state: &AppState, visitor: &Visitor) -> Result<Markup> {
    let ctx = page_context(state, visitor, None).await?;
    Ok(render_page(&ctx))
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    visitor: Visitor,
    Query(query): Query<LangQuery>,
) -> Result<Markup> {
    let ctx = page_context(&state, &visitor, query.lang.as_deref()).await?;
    Ok(render_page(&ctx))
}

/// `POST /language`
pub async fn set_language(visitor: Visitor, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    let lang = LanguageCode::parse_or_fallback(&form.lang);
    visitor.set_language(lang).await?;
    debug!(lang = lang.as_str(), "Language switched");
    Ok(Redirect::to("/"))
}

/// `POST /promotion/dismiss`
///
/// `?to=rooms` is the toast's call to action and lands on the rate table.
pub async fn dismiss_promotion(
    visitor: Visitor,
    Query(query): Query<DismissQuery>,
) -> Result<Redirect> {
    visitor.update(|s| s.promo_dismissed = true).await?;
    let target = match query.to.as_deref() {
        Some("rooms") => "/#rooms",
        _ => "/",
    };
    Ok(Redirect::to(target))
}
