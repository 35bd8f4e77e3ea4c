use khouse_content::property::ABOUT_IMAGE;
use khouse_content::ContentTree;
use maud::{html, Markup};

pub fn render(t: &ContentTree) -> Markup {
    html! {
        section id="about" class="section about" {
            div class="container about-grid" {
                div class="about-media" {
                    img src=(ABOUT_IMAGE) alt="Interior";
                    div class="location-card" {
                        p class="eyebrow" { (t.about.location_card.label) }
                        p class="location-value" { (t.about.location_card.value) }
                    }
                }
                div class="about-text" {
                    h2 class="eyebrow" { (t.about.welcome) }
                    h3 { (t.about.title) }
                    p class="lead" { (t.about.desc) }
                    ul class="points" {
                        @for point in t.about.points {
                            li { (point) }
                        }
                    }
                }
            }
        }
    }
}
