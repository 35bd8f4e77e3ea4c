use khouse_content::property::{FACEBOOK_URL, MAP_URL};
use khouse_content::{mailto_href, tel_href, ContentTree};
use maud::{html, Markup};

use super::BRAND;

pub fn render(t: &ContentTree) -> Markup {
    let c = &t.contact;
    html! {
        section id="contact" class="section contact" {
            div class="container contact-grid" {
                div {
                    h2 { (c.title) }
                    div class="rule rule-left" {}
                    p class="contact-desc" { (c.desc) }

                    div class="contact-item" {
                        span class="contact-icon" { "📍" }
                        div {
                            h4 { (c.address_title) }
                            p { (c.address_val) }
                        }
                    }
                    div class="contact-item" {
                        span class="contact-icon" { "📞" }
                        div {
                            h4 { (c.phone_title) }
                            a class="phone" href=(tel_href(c.phone_display)) { (c.phone_display) }
                            p class="hint" { (c.phone_action) }
                        }
                    }
                    div class="contact-item" {
                        span class="contact-icon" { "✉" }
                        div {
                            h4 { (c.email_title) }
                            a href=(mailto_href(c.email_val)) { (c.email_val) }
                        }
                    }
                    div class="contact-item" {
                        span class="contact-icon social" { "f" }
                        div {
                            h4 { (c.social_title) }
                            a href=(FACEBOOK_URL) target="_blank" rel="noopener noreferrer" { (c.social_label) }
                        }
                    }
                }

                div class="map-card" {
                    div class="map-pin" { "📍" }
                    h3 { (BRAND) }
                    a class="btn btn-light" href=(MAP_URL) target="_blank" rel="noopener noreferrer" { (c.map_btn) }
                }
            }
        }
    }
}
