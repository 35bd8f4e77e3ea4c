//! Session chat log of the chatbot widget.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Most messages kept per visitor. Older ones are dropped first.
pub const MAX_CHAT_MESSAGES: usize = 200;

/// Chat widget state of one visitor. The log only grows at the end, keeps
/// the last [`MAX_CHAT_MESSAGES`] entries and is never sent back to the
/// backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a question and its reply.
    pub fn record(&mut self, question: &str, reply: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: question.to_string(),
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply.to_string(),
        });

        if self.messages.len() > MAX_CHAT_MESSAGES {
            let excess = self.messages.len() - MAX_CHAT_MESSAGES;
            self.messages.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut chat = ChatState::default();
        chat.record("Is there parking?", "Yes, indoor parking.");
        chat.record("Wifi?", "Free high-speed WiFi.");

        let roles: Vec<_> = chat.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
        assert_eq!(chat.messages[3].text, "Free high-speed WiFi.");
    }

    #[test]
    fn test_log_keeps_latest_messages() {
        let mut chat = ChatState::default();
        for i in 0..MAX_CHAT_MESSAGES {
            chat.record(&format!("q{i}"), &format!("a{i}"));
        }

        assert_eq!(chat.messages.len(), MAX_CHAT_MESSAGES);
        assert_eq!(chat.messages[0].role, ChatRole::User);
        assert_eq!(chat.messages[0].text, format!("q{}", MAX_CHAT_MESSAGES / 2));
        assert_eq!(
            chat.messages.last().map(|m| m.text.as_str()),
            Some(format!("a{}", MAX_CHAT_MESSAGES - 1).as_str())
        );
    }
}
