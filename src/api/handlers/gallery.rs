use axum::extract::{Path, State};
use axum::response::Redirect;
use khouse_content::{room_card, RoomCard};
use maud::Markup;

use super::pages::render;
use crate::session::Visitor;
use crate::types::{AppError, Result};
use crate::AppState;

fn card(id: u32) -> Result<&'static RoomCard> {
    room_card(id).ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
}

/// `GET /rooms/{id}/gallery`
///
/// Reopening the room shown last resumes at the same image.
pub async fn open(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(id): Path<u32>,
) -> Result<Markup> {
    let card = card(id)?;
    visitor
        .update(|s| s.gallery.open(card.id, card.images.len()))
        .await?;
    render(&state, &visitor).await
}

async fn step(visitor: &Visitor, id: u32, forward: bool) -> Result<Redirect> {
    let card = card(id)?;
    let len = card.images.len();

    visitor
        .update(|s| {
            let gallery = &mut s.gallery;
            if !gallery.open || gallery.room != Some(card.id) {
                gallery.open(card.id, len);
            }
            if forward {
                gallery.next(len);
            } else {
                gallery.previous(len);
            }
        })
        .await?;

    Ok(Redirect::to(&format!("/rooms/{}/gallery", card.id)))
}

/// `POST /rooms/{id}/gallery/next`
pub async fn next(visitor: Visitor, Path(id): Path<u32>) -> Result<Redirect> {
    step(&visitor, id, true).await
}

/// `POST /rooms/{id}/gallery/prev`
pub async fn previous(visitor: Visitor, Path(id): Path<u32>) -> Result<Redirect> {
    step(&visitor, id, false).await
}

/// `POST /rooms/gallery/close`
pub async fn close(visitor: Visitor) -> Result<Redirect> {
    visitor.update(|s| s.gallery.close()).await?;
    Ok(Redirect::to("/#rooms"))
}
