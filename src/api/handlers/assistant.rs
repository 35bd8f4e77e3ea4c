//! Room matcher and chatbot widgets.
//!
//! Each visitor has at most one question pending per widget. While one is
//! pending, the HTML routes re-render the page without asking again and
//! the JSON routes answer `409 Conflict`.

use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use maud::Markup;
use tracing::debug;

use super::ensure_enabled;
use super::pages::{page_context, render};
use crate::assistant::Widget;
use crate::session::Visitor;
use crate::site::render_page;
use crate::types::{
    AppError, ChatRequest, ChatResponse, MatcherRequest, MatcherResponse, Result,
};
use crate::AppState;

fn matcher_enabled(state: &AppState) -> Result<()> {
    ensure_enabled(state.config.config().site.features.room_matcher, "Room matcher")
}

fn chatbot_enabled(state: &AppState) -> Result<()> {
    ensure_enabled(state.config.config().site.features.chatbot, "Chatbot")
}

// ============= Room Matcher =============

/// `GET /matcher`
pub async fn open_matcher(State(state): State<AppState>, visitor: Visitor) -> Result<Markup> {
    matcher_enabled(&state)?;
    visitor.update(|s| s.matcher.show()).await?;
    render(&state, &visitor).await
}

/// `POST /matcher`
pub async fn submit_matcher(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(form): Form<MatcherRequest>,
) -> Result<Response> {
    matcher_enabled(&state)?;
    let id = visitor.id().await?;

    let Some(_guard) = state.inflight.try_acquire(id, Widget::Matcher) else {
        debug!("Room matcher question already pending");
        return Ok(render(&state, &visitor).await?.into_response());
    };

    let reply = state.bridge.ask(Widget::Matcher, &form.query).await;
    visitor
        .update(|s| {
            s.matcher.show();
            if let Some(reply) = reply {
                s.matcher.answered(&form.query, reply.text);
            }
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// `POST /matcher/close`
pub async fn close_matcher(State(state): State<AppState>, visitor: Visitor) -> Result<Redirect> {
    matcher_enabled(&state)?;
    visitor.update(|s| s.matcher.close()).await?;
    Ok(Redirect::to("/"))
}

/// Ask the room matcher
#[utoipa::path(
    post,
    path = "/api/matcher",
    request_body = MatcherRequest,
    responses(
        (status = 200, description = "Recommendation, placeholder or failure message", body = MatcherResponse),
        (status = 400, description = "Empty query"),
        (status = 404, description = "Room matcher disabled"),
        (status = 409, description = "A question is already pending")
    ),
    tag = "assistant"
)]
pub async fn matcher_api(
    State(state): State<AppState>,
    visitor: Visitor,
    Json(req): Json<MatcherRequest>,
) -> Result<Json<MatcherResponse>> {
    matcher_enabled(&state)?;
    if req.query.trim().is_empty() {
        return Err(AppError::InvalidInput("Query must not be empty".into()));
    }

    let id = visitor.id().await?;
    let _guard = state
        .inflight
        .try_acquire(id, Widget::Matcher)
        .ok_or_else(|| AppError::Busy("A room matcher question is already pending".into()))?;

    let reply = state
        .bridge
        .ask(Widget::Matcher, &req.query)
        .await
        .ok_or_else(|| AppError::InvalidInput("Query must not be empty".into()))?;

    visitor
        .update(|s| s.matcher.answered(&req.query, reply.text.clone()))
        .await?;

    Ok(Json(MatcherResponse {
        result: reply.text,
        outcome: reply.outcome,
    }))
}

// ============= Chatbot =============

/// `GET /chat`
pub async fn open_chat(State(state): State<AppState>, visitor: Visitor) -> Result<Markup> {
    chatbot_enabled(&state)?;
    visitor.update(|s| s.chat.open = true).await?;
    render(&state, &visitor).await
}

/// `POST /chat`
pub async fn submit_chat(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(form): Form<ChatRequest>,
) -> Result<Response> {
    chatbot_enabled(&state)?;
    let id = visitor.id().await?;

    let Some(_guard) = state.inflight.try_acquire(id, Widget::Chat) else {
        debug!("Chat message already pending");
        let mut ctx = page_context(&state, &visitor, None).await?;
        ctx.chat.open = true;
        ctx.chat_notice = Some(ctx.t.chatbot.busy);
        return Ok(render_page(&ctx).into_response());
    };

    let reply = state.bridge.ask(Widget::Chat, &form.message).await;
    visitor
        .update(|s| {
            s.chat.open = true;
            if let Some(reply) = reply {
                s.chat.record(form.message.trim(), &reply.text);
            }
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// `POST /chat/close`
pub async fn close_chat(State(state): State<AppState>, visitor: Visitor) -> Result<Redirect> {
    chatbot_enabled(&state)?;
    visitor.update(|s| s.chat.open = false).await?;
    Ok(Redirect::to("/"))
}

/// Send a chat message
///
/// The reply is appended to the visitor's chat log, which is returned
/// whole. Earlier messages are not sent to the model.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply and session log", body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 404, description = "Chatbot disabled"),
        (status = 409, description = "A message is already pending")
    ),
    tag = "assistant"
)]
pub async fn chat_api(
    State(state): State<AppState>,
    visitor: Visitor,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    chatbot_enabled(&state)?;
    if req.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message must not be empty".into()));
    }

    let id = visitor.id().await?;
    let _guard = state
        .inflight
        .try_acquire(id, Widget::Chat)
        .ok_or_else(|| AppError::Busy("A chat message is already pending".into()))?;

    let reply = state
        .bridge
        .ask(Widget::Chat, &req.message)
        .await
        .ok_or_else(|| AppError::InvalidInput("Message must not be empty".into()))?;

    let messages = visitor
        .update(|s| {
            s.chat.record(req.message.trim(), &reply.text);
            s.chat.messages.clone()
        })
        .await?;

    Ok(Json(ChatResponse {
        reply: reply.text,
        outcome: reply.outcome,
        messages,
    }))
}
