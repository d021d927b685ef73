use zonecheck_domain::config::LogFormat;
use zonecheck_domain::{CliOverrides, Config, ConfigError, ProviderConfigs, QueryConfig};

const PROVIDERS: &str = r#"{
    "bind": { "domain": "example.com", "providerType": "BIND", "directory": "zones" },
    "verify": {
        "domain": "example.org",
        "providerType": "QUERY",
        "defaultServer": "1.1.1.1",
        "allNameservers": false,
        "soaSerial": 2024010101
    }
}"#;

#[test]
fn test_provider_configs_parse_and_order() {
    let configs = ProviderConfigs::from_json(PROVIDERS).unwrap();

    assert_eq!(configs.len(), 2);
    let names: Vec<&str> = configs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["bind", "verify"]);

    let bind = configs.get("bind").unwrap();
    assert_eq!(bind.domain, "example.com");
    assert_eq!(bind.provider_type, "BIND");
    assert_eq!(bind.setting("directory").as_deref(), Some("zones"));
}

#[test]
fn test_provider_configs_reject_missing_domain() {
    let result = ProviderConfigs::from_json(r#"{ "x": { "domain": "", "providerType": "QUERY" } }"#);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_provider_configs_reject_malformed_json() {
    let result = ProviderConfigs::from_json("{ not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_query_config_merges_provider_settings() {
    let configs = ProviderConfigs::from_json(PROVIDERS).unwrap();
    let merged = QueryConfig::default()
        .with_provider_settings(configs.get("verify").unwrap())
        .unwrap();

    assert_eq!(merged.default_server, "1.1.1.1");
    assert!(!merged.all_nameservers);
    assert_eq!(merged.soa_serial, 2024010101);
    assert_eq!(merged.timeout_ms, 5000);
}

#[test]
fn test_query_config_rejects_bad_setting() {
    let provider = zonecheck_domain::ProviderConfig::new("v", "example.com", "QUERY")
        .with_setting("soaSerial", "tomorrow");
    let result = QueryConfig::default().with_provider_settings(&provider);

    assert!(matches!(result, Err(ConfigError::InvalidSetting { .. })));
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.query.default_server, "8.8.8.8");
    assert_eq!(config.query.port, 53);
    assert!(config.query.all_nameservers);
    assert_eq!(config.harness.providers_file, "providers.json");
    assert_eq!(config.harness.ns_ttl, 300);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml_and_overrides() {
    let mut config = Config::from_toml(
        r#"
        [logging]
        level = "debug"
        format = "json"

        [query]
        timeout_ms = 1500
        default_server = "9.9.9.9"

        [spf]
        whitelist = ["_spf.google.com"]
        "#,
    )
    .unwrap();

    config.apply_cli_overrides(CliOverrides {
        log_level: Some("warn".to_string()),
        dual_providers: true,
        ..Default::default()
    });

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.query.timeout_ms, 1500);
    assert_eq!(config.query.default_server, "9.9.9.9");
    assert!(config.harness.dual_providers);
    assert!(!config.harness.verify_live);
    assert_eq!(config.spf.whitelist, vec!["_spf.google.com"]);
}

#[test]
fn test_config_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.query.timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}
