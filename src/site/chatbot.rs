use maud::{html, Markup};

use super::PageContext;
use crate::assistant::ChatRole;

/// Chat panel, when open.
pub fn render(ctx: &PageContext) -> Markup {
    let t = &ctx.t.chatbot;
    if !ctx.chat.open {
        return html! {};
    }

    html! {
        aside class="chat-panel" aria-label=(t.title) {
            div class="chat-head" {
                h3 { (t.title) }
                form method="post" action="/chat/close" {
                    button type="submit" aria-label="Close" { "×" }
                }
            }
            div class="chat-log" {
                p class="chat-msg assistant" { (t.greeting) }
                @for message in &ctx.chat.messages {
                    p class=(match message.role {
                        ChatRole::User => "chat-msg user",
                        ChatRole::Assistant => "chat-msg assistant",
                    }) { (message.text) }
                }
            }
            @if let Some(notice) = ctx.chat_notice {
                p class="chat-notice" { (notice) }
            }
            form method="post" action="/chat" class="chat-input" {
                input type="text" name="message" placeholder=(t.placeholder) autocomplete="off" required;
                button type="submit" { (t.send_btn) }
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
    fn test_chat_log_in_order_after_greeting() {
        let mut ctx = PageContext::new(LanguageCode::En, FeatureConfig::default(), 0, 2026);
        ctx.chat.open = true;
        ctx.chat.record("Is there parking?", "Yes, indoor parking.");

        let html = render(&ctx).into_string();
        let greeting = html.find(ctx.t.chatbot.greeting).unwrap();
        let question = html.find("Is there parking?").unwrap();
        let answer = html.find("Yes, indoor parking.").unwrap();
        assert!(greeting < question && question < answer);
    }

    #[test]
    fn test_busy_notice() {
        let mut ctx = PageContext::new(LanguageCode::Jp, FeatureConfig::default(), 0, 2026);
        ctx.chat.open = true;
        ctx.chat_notice = Some(ctx.t.chatbot.busy);

        assert!(render(&ctx).into_string().contains("前のメッセージに回答中です。"));
    }
}
