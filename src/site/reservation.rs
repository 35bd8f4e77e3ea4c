use khouse_content::ROOM_CARDS;
use maud::{html, Markup};

use super::{field_class, PageContext};
use crate::reservation::{Field, FormView, ReservationDraft};

/// Reservation modal, when open.
pub fn render(ctx: &PageContext) -> Markup {
    let t = &ctx.t.reservation;
    if !ctx.reservation.open {
        return html! {};
    }

    html! {
        div class="modal-overlay" role="dialog" aria-modal="true" {
            div class="modal reservation" {
                form method="post" action="/reservation/close" class="modal-close" {
                    button type="submit" aria-label=(t.close) { "×" }
                }
                @match &ctx.reservation.view {
                    FormView::Input { draft, missing } => {
                        (input_view(ctx, draft, missing))
                    }
                    FormView::Submitting { .. } => {
                        p class="submitting" { (t.submitting) }
                    }
                    FormView::Success { .. } => {
                        div class="success" {
                            span class="success-mark" { "✓" }
                            h3 { (t.success_title) }
                            p { (t.success_detail) }
                            form method="post" action="/reservation/close" {
                                button type="submit" class="btn btn-primary" { (t.close) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn text_field(ctx: &PageContext, missing: &[Field], field: Field, kind: &str, value: &str) -> Markup {
    let t = &ctx.t.reservation;
    html! {
        label class=(field_class(missing, field)) {
            span { (field.label(t)) " *" }
            input type=(kind) name=(field.as_str()) value=(value) required;
            @if missing.contains(&field) {
                small class="field-hint" { (t.required_hint) }
            }
        }
    }
}

fn input_view(ctx: &PageContext, draft: &ReservationDraft, missing: &[Field]) -> Markup {
    let t = &ctx.t.reservation;
    html! {
        h3 { (t.title) }
        p class="modal-subtitle" { (t.subtitle) }
        form method="post" action="/reservation" class="reservation-form" {
            (text_field(ctx, missing, Field::Name, "text", &draft.name))
            (text_field(ctx, missing, Field::Email, "email", &draft.email))
            (text_field(ctx, missing, Field::Phone, "tel", &draft.phone))

            label class=(field_class(missing, Field::RoomType)) {
                span { (t.room_type) " *" }
                select name="room_type" required {
                    option value="" selected[draft.room_type.is_empty()] { "-" }
                    @for (card, room) in ROOM_CARDS.iter().zip(ctx.t.rooms.types) {
                        @let id = card.id.to_string();
                        option value=(id) selected[draft.room_type == id] { (room.title) }
                    }
                }
                @if missing.contains(&Field::RoomType) {
                    small class="field-hint" { (t.required_hint) }
                }
            }

            (text_field(ctx, missing, Field::MoveIn, "date", &draft.move_in))

            label class="form-field" {
                span { (t.contract) }
                select name="contract" {
                    @for (index, option) in t.contract_options.iter().enumerate() {
                        @let value = index.to_string();
                        option value=(value) selected[draft.contract == value] { (option) }
                    }
                }
            }

            label class="form-field" {
                span { (t.message) }
                textarea name="message" rows="3" { (draft.message) }
            }

            button type="submit" class="btn btn-primary btn-block" { (t.submit) }
        }
    }
}
