use khouse_content::property::CARD_LOGOS;
use khouse_content::{Rate, RATES, ROOM_CARDS};
use maud::{html, Markup};

use super::{promotion, PageContext};

pub fn render(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    html! {
        section id="rooms" class="section rooms" {
            div class="container" {
                div class="center rooms-header" {
                    h2 { (t.rooms.title) }
                    div class="rule" {}
                    p class="rooms-subtitle" { (t.rooms.subtitle) }
                    @if ctx.features.room_matcher {
                        a class="ai-help" href="/matcher" { "✨ " (t.rooms.ai_help_btn) }
                    }
                }

                (promotion::banner(ctx))
                (cards(ctx))
                (rate_table(ctx))
                (extras(ctx))
            }
        }
    }
}

fn cards(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    html! {
        div class="room-grid" {
            @for (card, room) in ROOM_CARDS.iter().zip(t.rooms.types) {
                article class="room-card" {
                    a class="room-cover" href={ "/rooms/" (card.id) "/gallery" } {
                        @if card.hot_promo {
                            span class="hot-deal" { "Hot Deal" }
                        }
                        span class="view-photos" { (t.rooms.view_photos) }
                        @if let Some(cover) = card.cover() {
                            img src=(cover) alt=(room.title) loading="lazy";
                        }
                    }
                    div class="room-body" {
                        h3 { (room.title) }
                        div class="room-rule" {}
                        div class="room-features" {
                            @for feature in room.features {
                                span class="chip" { (feature) }
                            }
                        }
                        div class="room-price" {
                            p class="price-label" { (t.rooms.price_start) }
                            p class="price" {
                                (card.start_price) " "
                                span class="unit" { (t.rooms.unit) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn price_cell(rate: Option<&Rate>, highlight: bool) -> Markup {
    html! {
        td class="rate-cell" {
            @match rate {
                Some(rate) => {
                    span class="old-price" { (rate.old) }
                    span class=(if highlight { "new-price highlight" } else { "new-price" }) { (rate.new) }
                }
                None => {
                    span class="no-rate" { "-" }
                }
            }
        }
    }
}

fn rate_table(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    html! {
        div class="rates" {
            div class="rates-head" {
                h3 { "Room Rates" }
                span { (t.rooms.unit_label) }
            }
            div class="table-scroll" {
                table {
                    thead {
                        tr {
                            @for header in t.rooms.table_headers {
                                th { (header) }
                            }
                        }
                    }
                    tbody {
                        @for row in &RATES {
                            tr {
                                td class="rate-name" {
                                    div class="name" { (row.name) }
                                    div class="size" { (row.size) }
                                }
                                (price_cell(Some(&row.rates.y1), true))
                                (price_cell(Some(&row.rates.m6), false))
                                (price_cell(row.rates.m3.as_ref(), false))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn extras(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    html! {
        div class="extras" {
            div {
                h4 { (t.rooms.extra_charges) }
                ul {
                    li { "📺 " (t.rooms.tv) }
                    li { "🧊 " (t.rooms.fridge) }
                }
                p class="disclaimer" { (t.rooms.disclaimer) }
            }
            div class="cards-accepted" {
                p { (t.rooms.cc) }
                div class="card-logos" {
                    @for (name, url) in CARD_LOGOS {
                        span class="card-logo" { img src=(url) alt=(name); }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::FeatureConfig;
    use khouse_content::LanguageCode;

    #[test]
    fn test_cards_pair_with_localized_types() {
        let ctx = PageContext::new(LanguageCode::Cn, FeatureConfig::default(), 0, 2026);
        let html = render(&ctx).into_string();

        for (card, room) in ROOM_CARDS.iter().zip(ctx.t.rooms.types) {
            assert!(html.contains(room.title));
            assert!(html.contains(&format!("/rooms/{}/gallery", card.id)));
        }
        assert_eq!(html.matches("Hot Deal").count(), 2);
    }

    #[test]
    fn test_rate_table_rows() {
        let ctx = PageContext::new(LanguageCode::En, FeatureConfig::default(), 0, 2026);
        let html = rate_table(&ctx).into_string();

        assert_eq!(html.matches("<tr>").count(), RATES.len() + 1);
        // Studios have no 3 month contract
        assert_eq!(html.matches(r#"<span class="no-rate">-</span>"#).count(), 2);
        assert!(html.contains("Room Rates"));
    }
}
