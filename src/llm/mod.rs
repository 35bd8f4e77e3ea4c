//! LLM provider clients
//!
//! - [`LLMClient`] - The trait every backend implements
//! - [`Provider`] - Runtime selection between Gemini and the offline stub
//! - [`LLMClientFactory`] - Builds the client for the configured provider

/// Core LLM client trait and provider selection.
pub mod client;
/// Google Gemini `generateContent` client.
pub mod gemini;

pub use client::{LLMClient, LLMClientFactory, LLMResponse, OfflineClient, Provider};
pub use gemini::GeminiClient;
