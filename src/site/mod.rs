//! Server-rendered page: one function per section, all consuming the
//! resolved content tree and the visitor's widget state.

pub mod about;
pub mod chatbot;
pub mod contact;
pub mod facilities;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod matcher;
pub mod navbar;
pub mod promotion;
pub mod reservation;
pub mod rooms;

use khouse_content::{ContentTree, LanguageCode};
use maud::{html, Markup};

use crate::assistant::{ChatState, MatcherState};
use crate::gallery::GalleryState;
use crate::reservation::{Field, ReservationForm};
use crate::utils::toml_config::FeatureConfig;

/// Brand name shown in the footer and the map card.
pub const BRAND: &str = "K-HOUSE 71";

/// Everything a page render needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub lang: LanguageCode,
    pub t: &'static ContentTree,
    pub features: FeatureConfig,
    pub promo_delay_ms: u64,
    pub show_promo: bool,
    pub gallery: GalleryState,
    pub matcher: MatcherState,
    pub chat: ChatState,
    /// Notice shown above the chat input
    pub chat_notice: Option<&'static str>,
    pub reservation: ReservationForm,
    pub year: i32,
}

impl PageContext {
    /// Page for a visitor with no widget open.
    pub fn new(lang: LanguageCode, features: FeatureConfig, promo_delay_ms: u64, year: i32) -> Self {
        Self {
            lang,
            t: lang.content(),
            features,
            promo_delay_ms,
            show_promo: true,
            gallery: GalleryState::default(),
            matcher: MatcherState::default(),
            chat: ChatState::default(),
            chat_notice: None,
            reservation: ReservationForm::default(),
            year,
        }
    }
}

/// Render the whole page.
pub fn render_page(ctx: &PageContext) -> Markup {
    layout::document(
        ctx,
        html! {
            (navbar::render(ctx))
            (hero::render(ctx.t))
            (about::render(ctx.t))
            (facilities::render(ctx.t))
            (rooms::render(ctx))
            (contact::render(ctx.t))
            (footer::render(ctx.t, ctx.year))
            (gallery::render(ctx))
            @if ctx.features.room_matcher {
                (matcher::render(ctx))
            }
            (floating_actions(ctx))
            @if ctx.features.chatbot {
                (chatbot::render(ctx))
            }
            @if ctx.features.reservation {
                (reservation::render(ctx))
            }
            @if ctx.show_promo {
                (promotion::toast(ctx))
            }
        },
    )
}

fn floating_actions(ctx: &PageContext) -> Markup {
    html! {
        div class="floating-actions" {
            @if ctx.features.reservation && !ctx.reservation.open {
                a class="fab fab-reserve" href="/reservation" { (ctx.t.reservation.open_btn) }
            }
            @if ctx.features.chatbot && !ctx.chat.open {
                a class="fab fab-chat" href="/chat" { "💬 " (ctx.t.chatbot.open_btn) }
            }
        }
    }
}

/// `missing` class for a field left blank on the last submission.
pub(crate) fn field_class(missing: &[Field], field: Field) -> &'static str {
    if missing.contains(&field) {
        "form-field missing"
    } else {
        "form-field"
    }
}
