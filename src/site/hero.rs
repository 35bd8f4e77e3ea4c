use khouse_content::property::HERO_IMAGE;
use khouse_content::ContentTree;
use maud::{html, Markup};

pub fn render(t: &ContentTree) -> Markup {
    html! {
        header id="home" class="hero" {
            div class="hero-backdrop" {
                img src=(HERO_IMAGE) alt="Bangkok Skyline";
                div class="hero-shade" {}
            }
            div class="container hero-content" {
                span class="badge" { (t.hero.location_badge) }
                h1 { (t.hero.title) }
                p class="hero-subtitle" { (t.hero.subtitle) }
                div class="hero-actions" {
                    a class="btn btn-primary" href="#rooms" { (t.hero.cta_rooms) }
                    a class="btn btn-ghost" href="#contact" { (t.hero.cta_contact) }
                }
            }
        }
    }
}
