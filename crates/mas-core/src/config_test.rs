use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MAS_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.fetch_timeout_secs, 30);
    assert_eq!(cfg.fetch_user_agent, "mas/0.1 (marketing-agent)");
    assert_eq!(cfg.llm_base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.llm_model, "gpt-4");
    assert_eq!(cfg.llm_timeout_secs, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("MAS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_BIND_ADDR"),
        "expected InvalidEnvVar(MAS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_unknown_env() {
    let mut map = HashMap::new();
    map.insert("MAS_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_ENV"),
        "expected InvalidEnvVar(MAS_ENV), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_override() {
    let mut map = HashMap::new();
    map.insert("MAS_FETCH_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_timeout_secs, 5);
}

#[test]
fn fetch_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("MAS_FETCH_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MAS_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MAS_FETCH_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MAS_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("MAS_FETCH_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_user_agent, "custom-agent/2.0");
}

#[test]
fn llm_base_url_trailing_slash_is_trimmed() {
    let mut map = HashMap::new();
    map.insert("MAS_LLM_BASE_URL", "http://localhost:8001/v1/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.llm_base_url, "http://localhost:8001/v1");
}

#[test]
fn llm_base_url_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MAS_LLM_BASE_URL", "api.openai.com/v1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_LLM_BASE_URL"),
        "expected InvalidEnvVar(MAS_LLM_BASE_URL), got: {result:?}"
    );
}

#[test]
fn llm_model_override() {
    let mut map = HashMap::new();
    map.insert("MAS_LLM_MODEL", "gpt-4o-mini");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.llm_model, "gpt-4o-mini");
}

#[test]
fn llm_model_blank_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MAS_LLM_MODEL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_LLM_MODEL"),
        "expected InvalidEnvVar(MAS_LLM_MODEL), got: {result:?}"
    );
}

#[test]
fn llm_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("MAS_LLM_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAS_LLM_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MAS_LLM_TIMEOUT_SECS), got: {result:?}"
    );
}
