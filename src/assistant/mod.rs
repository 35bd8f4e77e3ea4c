//! Room matcher and chatbot: the bridge to the text-generation backend and
//! the per-visitor widget state.

pub mod bridge;
pub mod chat;
pub mod inflight;
pub mod matcher;
pub mod prompts;

pub use bridge::{AiBridge, BridgeOutcome, BridgeReply, PLACEHOLDER};
pub use chat::{ChatMessage, ChatRole, ChatState};
pub use inflight::{InFlight, InFlightGuard};
pub use matcher::MatcherState;
pub use prompts::Widget;
