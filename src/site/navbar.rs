use khouse_content::{LanguageCode, LANGUAGE_OPTIONS};
use maud::{html, Markup};

use super::PageContext;

pub fn render(ctx: &PageContext) -> Markup {
    html! {
        nav class="navbar" {
            div class="container navbar-inner" {
                a class="brand" href="#home" {
                    img class="brand-logo" src="/static/k-logo.svg" alt="K-House Logo" width="60" height="60";
                    span class="brand-text" {
                        span class="brand-name" { "K-HOUSE" }
                        span class="brand-sub" { "Sukhumvit 71" }
                    }
                }

                div class="nav-links" {
                    @for (anchor, label) in ctx.t.nav.entries() {
                        a href={ "#" (anchor) } { (label) }
                    }
                    details class="lang-dropdown" {
                        summary {
                            span class="globe" { "🌐" }
                            span class="lang-code" { (ctx.lang.as_str()) }
                        }
                        div class="lang-menu" {
                            (language_forms(ctx.lang, "lang-option"))
                        }
                    }
                }

                details class="mobile-menu" {
                    summary aria-label="Menu" { "☰" }
                    div class="mobile-panel" {
                        div class="mobile-links" {
                            @for (anchor, label) in ctx.t.nav.entries() {
                                a href={ "#" (anchor) } { (label) }
                            }
                        }
                        p class="mobile-lang-title" { "Select Language" }
                        div class="mobile-lang-grid" {
                            (language_forms(ctx.lang, "lang-chip"))
                        }
                    }
                }
            }
        }
    }
}

/// One POST form per language, the active one highlighted.
fn language_forms(active: LanguageCode, class: &str) -> Markup {
    html! {
        @for opt in &LANGUAGE_OPTIONS {
            @let selected = opt.code == active;
            form method="post" action="/language" {
                input type="hidden" name="lang" value=(opt.code.as_str());
                button type="submit" class=(if selected { format!("{} active", class) } else { class.to_string() }) {
                    span { (opt.full_label) }
                    @if selected {
                        span class="dot" {}
                    }
                }
            }
        }
    }
}
