use khouse_content::PROMO_FLOOR_PRICE;
use maud::{html, Markup};

use super::PageContext;

const LIMITED_FALLBACK: &str = "LIMITED TIME OFFER";

/// Dark banner at the top of the rooms section.
pub fn banner(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    let limited = if t.promotion.limited.is_empty() {
        LIMITED_FALLBACK
    } else {
        t.promotion.limited
    };

    html! {
        div class="promo-banner" {
            div class="promo-main" {
                div class="promo-limited" { "★ " (limited) }
                h3 { (t.promotion.title) }
                p class="promo-detail" { (t.promotion.detail) }
                div class="promo-price-row" {
                    div {
                        p class="promo-from" { (t.promotion_banner.starting_from) }
                        p class="promo-price" {
                            (PROMO_FLOOR_PRICE)
                            span class="promo-unit" { (t.promotion_banner.unit_mo) }
                        }
                    }
                    div class="promo-divider" {}
                    p class="promo-contract" { (t.promotion_banner.contract_1yr) }
                }
            }
            div class="promo-side" {
                p class="promo-exclusive" { "Exclusive Offer" }
                p class="promo-save" { "SAVE BIG" }
                p class="promo-long" { "On Long Term Stays" }
            }
        }
    }
}

/// Toast sliding in after the configured delay until dismissed.
pub fn toast(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    html! {
        aside class="promo-toast" style={ "animation-delay: " (ctx.promo_delay_ms) "ms" } {
            form method="post" action="/promotion/dismiss" class="toast-close" {
                button type="submit" aria-label="Close" { "×" }
            }
            div class="toast-body" {
                span class="toast-star" { "★" }
                div {
                    h3 { (t.promotion.title) }
                    p { (t.promotion.detail) }
                    form method="post" action="/promotion/dismiss?to=rooms" {
                        button type="submit" class="link-button" { (t.promotion.cta) }
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
    fn test_banner_shows_floor_price() {
        let ctx = PageContext::new(LanguageCode::Th, FeatureConfig::default(), 2000, 2026);
        let html = banner(&ctx).into_string();
        assert!(html.contains("5,900"));
        assert!(html.contains("SAVE BIG"));
        assert!(html.contains("ด่วน! ห้องมีจำนวนจำกัด"));
    }
}
