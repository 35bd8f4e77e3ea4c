use khouse_content::ContentTree;
use maud::{html, Markup};

use super::BRAND;

pub fn render(t: &ContentTree, year: i32) -> Markup {
    html! {
        footer class="footer" {
            div class="container center" {
                span class="footer-brand" { (BRAND) }
                p { "© " (year) " " (t.footer.rights) }
            }
        }
    }
}
