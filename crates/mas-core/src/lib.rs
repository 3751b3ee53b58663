//! Shared configuration and domain types for the marketing agent system.

pub mod agents;
pub mod app_config;
pub mod config;
pub mod secret;
pub mod strategy;
pub mod text;

use thiserror::Error;

pub use agents::{
    analyze, decide_go, generate_plan, AgentKind, AgentResult, AnalysisReport, WorkPlan,
    GO_THRESHOLD,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use secret::ApiKey;
pub use strategy::{Strategy, StrategyReport};
pub use text::{truncate_chars, MAX_PROMPT_CHARS};

/// Shown whenever an operation is attempted without an API key.
pub const MISSING_API_KEY_MESSAGE: &str = "Please enter your OpenAI API key to begin.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Please enter your OpenAI API key to begin.")]
    MissingApiKey,
}
