use maud::{html, Markup, DOCTYPE};

use super::PageContext;

/// HTML document shell.
pub fn document(ctx: &PageContext, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.lang.html_lang()) dir=(ctx.lang.direction().as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "K-House 71 | " (ctx.t.hero.title) }
                meta name="description" content=(ctx.t.hero.subtitle);
                link rel="icon" href="/static/k-logo.svg" type="image/svg+xml";
                link rel="stylesheet" href="/static/site.css";
            }
            body class={ "lang-" (ctx.lang.as_str()) } {
                (body)
            }
        }
    }
}
