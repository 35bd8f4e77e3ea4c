use khouse_content::{ContentTree, FACILITY_ICONS};
use maud::{html, Markup};

pub fn render(t: &ContentTree) -> Markup {
    html! {
        section id="facilities" class="section facilities" {
            div class="container center" {
                h2 { (t.facilities.title) }
                div class="rule" {}
                p class="section-subtitle" { (t.facilities.subtitle) }
                div class="facility-grid" {
                    @for (icon, item) in FACILITY_ICONS.iter().zip(t.facilities.items) {
                        div class={ "facility icon-" (icon.name()) } {
                            span class="facility-icon" aria-hidden="true" { (icon.glyph()) }
                            h4 { (item.name) }
                        }
                    }
                }
            }
        }
    }
}
