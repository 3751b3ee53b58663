//! Prompt templates and the chat-completion client.

pub mod client;
pub mod error;
pub mod prompts;
pub mod types;

pub use client::{CompletionClient, LlmSettings};
pub use error::LlmError;
pub use prompts::{build_strategy_prompt, build_summary_prompt, Prompt};
