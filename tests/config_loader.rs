use coinboard::config::{ApiConfig, Config, ConfigError, LoggingConfig, ViewConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.endpoint, "https://api.coincap.io/v2/assets");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.view.page_size, 5);
    assert_eq!(config.view.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("coinboard/config.toml"));
}

/// A missing file is not an error; defaults apply.
#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_full_file_round_trips_every_section() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
endpoint = "http://localhost:8080/v2/assets"
timeout_seconds = 3
connect_timeout_seconds = 1

[view]
page_size = 10
tick_rate_ms = 100

[logging]
level = "coinboard=debug"
file = "/tmp/coinboard-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config,
        Config {
            api: ApiConfig {
                endpoint: "http://localhost:8080/v2/assets".to_string(),
                timeout_seconds: 3,
                connect_timeout_seconds: 1,
            },
            view: ViewConfig {
                page_size: 10,
                tick_rate_ms: 100,
            },
            logging: LoggingConfig {
                level: "coinboard=debug".to_string(),
                file: Some("/tmp/coinboard-test.log".into()),
            },
        }
    );
}

/// Fields left out of a section keep their defaults.
#[test]
fn test_partial_section_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[view]\npage_size = 8\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.view.page_size, 8);
    assert_eq!(config.view.tick_rate_ms, 250);
    assert_eq!(config.api, ApiConfig::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nendpoint = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[view]\npage_size = \"five\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_page_size_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[view]\npage_size = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("view.page_size"));
}

#[test]
fn test_non_http_endpoint_fails_validation() {
    let mut config = Config::default();
    config.api.endpoint = "ftp://example.com/assets".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must start with http:// or https://"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.api.connect_timeout_seconds = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.view.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}
