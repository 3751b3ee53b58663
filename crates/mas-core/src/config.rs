use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let env = parse_environment(&or_default("MAS_ENV", "development"))?;
    let bind_addr = parse_addr("MAS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MAS_LOG_LEVEL", "info");

    let fetch_timeout_secs = parse_secs("MAS_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default("MAS_FETCH_USER_AGENT", "mas/0.1 (marketing-agent)");

    let llm_base_url = or_default("MAS_LLM_BASE_URL", "https://api.openai.com/v1");
    if !(llm_base_url.starts_with("http://") || llm_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "MAS_LLM_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{llm_base_url}\""),
        });
    }
    let llm_base_url = llm_base_url.trim_end_matches('/').to_string();

    let llm_model = or_default("MAS_LLM_MODEL", "gpt-4");
    if llm_model.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "MAS_LLM_MODEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let llm_timeout_secs = parse_secs("MAS_LLM_TIMEOUT_SECS", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        fetch_timeout_secs,
        fetch_user_agent,
        llm_base_url,
        llm_model,
        llm_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MAS_ENV".to_string(),
            reason: format!("expected development, test or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
