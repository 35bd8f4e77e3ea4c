use maud::{html, Markup};

use super::PageContext;

/// Room matcher modal, when open.
pub fn render(ctx: &PageContext) -> Markup {
    let t = &ctx.t.room_matcher;
    let state = &ctx.matcher;
    if !state.open {
        return html! {};
    }

    html! {
        div class="modal-overlay" role="dialog" aria-modal="true" {
            div class="modal matcher" {
                form method="post" action="/matcher/close" class="modal-close" {
                    button type="submit" aria-label="Close" { "×" }
                }
                div class="modal-title" {
                    span aria-hidden="true" { "🧠" }
                    h3 { (t.title) }
                }
                p class="modal-subtitle" { (t.subtitle) }
                form method="post" action="/matcher" {
                    textarea name="query" placeholder=(t.placeholder) required { (state.query) }
                    button type="submit" class="btn btn-primary btn-block" { "✨ " (t.analyze_btn) }
                }
                @if let Some(result) = &state.result {
                    div class="matcher-result" {
                        h4 { (t.result_title) }
                        p { (result) }
                    }
                }
            }
        }
    }
}
