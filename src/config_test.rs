use super::*;

#[test]
fn from_values_defaults_to_local_api() {
    let cfg = ClientConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.data_source, DataSourceKind::Api);
    assert_eq!(cfg.log_level, log::Level::Info);
    assert!(!cfg.is_demo());
}

#[test]
fn from_values_selects_demo_source() {
    let cfg = ClientConfig::from_values(None, Some("demo"), None).unwrap();
    assert!(cfg.is_demo());
}

#[test]
fn from_values_trims_trailing_slash_from_base() {
    let cfg = ClientConfig::from_values(Some("https://taskflow.example.test/"), None, None).unwrap();
    assert_eq!(cfg.api_base, "https://taskflow.example.test");
}

#[test]
fn from_values_rejects_blank_base() {
    assert_eq!(
        ClientConfig::from_values(Some(" / "), None, None),
        Err(ConfigError::EmptyApiBase)
    );
}

#[test]
fn from_values_rejects_unknown_source() {
    assert_eq!(
        ClientConfig::from_values(None, Some("github-pages"), None),
        Err(ConfigError::UnknownDataSource("github-pages".to_owned()))
    );
}

#[test]
fn from_values_parses_log_level_case_insensitively() {
    let cfg = ClientConfig::from_values(None, None, Some("DEBUG")).unwrap();
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_values_rejects_unknown_log_level() {
    assert_eq!(
        ClientConfig::from_values(None, None, Some("loud")),
        Err(ConfigError::InvalidLogLevel("loud".to_owned()))
    );
}
