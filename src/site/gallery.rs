use khouse_content::room_card;
use maud::{html, Markup};

use super::PageContext;

/// Full-screen gallery of the selected room, when open.
pub fn render(ctx: &PageContext) -> Markup {
    let gallery = &ctx.gallery;
    let Some(card) = gallery.room.and_then(room_card) else {
        return html! {};
    };
    let Some(image) = gallery.current(card.images) else {
        return html! {};
    };
    let len = card.images.len();

    html! {
        div class="gallery-overlay" role="dialog" aria-modal="true" {
            form method="post" action="/rooms/gallery/close" class="gallery-close" {
                button type="submit" aria-label="Close" { "×" }
            }
            div class="gallery-stage" {
                @if len > 1 {
                    form method="post" action={ "/rooms/" (card.id) "/gallery/prev" } class="gallery-prev" {
                        button type="submit" aria-label="Previous" { "‹" }
                    }
                }
                img src=(image) alt={ "Gallery Image " (gallery.index + 1) };
                @if len > 1 {
                    form method="post" action={ "/rooms/" (card.id) "/gallery/next" } class="gallery-next" {
                        button type="submit" aria-label="Next" { "›" }
                    }
                }
                div class="gallery-dots" {
                    @for idx in 0..len {
                        span class=(if idx == gallery.index { "dot current" } else { "dot" }) {}
                    }
                }
            }
        }
    }
}
