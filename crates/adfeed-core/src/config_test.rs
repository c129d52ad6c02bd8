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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("HASURA_GRAPHQL_ENDPOINT", "https://hasura.example.com/v1/graphql");
    m.insert("HASURA_ADMIN_SECRET", "test-secret");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ADFEED_ENV"));
}

#[test]
fn build_app_config_fails_without_endpoint() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HASURA_GRAPHQL_ENDPOINT"),
        "expected MissingEnvVar(HASURA_GRAPHQL_ENDPOINT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_admin_secret() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("HASURA_GRAPHQL_ENDPOINT", "https://hasura.example.com/v1/graphql");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HASURA_ADMIN_SECRET"),
        "expected MissingEnvVar(HASURA_ADMIN_SECRET), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_secret_as_missing() {
    let mut map = full_env();
    map.insert("HASURA_ADMIN_SECRET", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HASURA_ADMIN_SECRET"),
        "expected MissingEnvVar(HASURA_ADMIN_SECRET), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(
        cfg.graphql_endpoint,
        "https://hasura.example.com/v1/graphql"
    );
    assert_eq!(cfg.admin_secret, "test-secret");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.feed_path.to_str(), Some("./feed.xml"));
    assert_eq!(cfg.feed_title, "Ayshei Products");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "adfeed/0.1 (product-feed)");
    assert_eq!(cfg.schedule, "0 0 */6 * * *");
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("ADFEED_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("ADFEED_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADFEED_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ADFEED_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_zero_rejected() {
    let mut map = full_env();
    map.insert("ADFEED_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADFEED_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ADFEED_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_feed_path_and_schedule_overrides() {
    let mut map = full_env();
    map.insert("ADFEED_FEED_PATH", "/srv/feeds/products.xml");
    map.insert("ADFEED_SCHEDULE", "0 30 2 * * *");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_path.to_str(), Some("/srv/feeds/products.xml"));
    assert_eq!(cfg.schedule, "0 30 2 * * *");
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = full_env();
    map.insert("ADFEED_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADFEED_ENV"),
        "expected InvalidEnvVar(ADFEED_ENV), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_admin_secret() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-secret"));
    assert!(rendered.contains("[redacted]"));
}
