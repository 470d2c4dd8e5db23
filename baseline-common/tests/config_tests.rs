//! Configuration resolution tests
//!
//! Covers the per-field priority order (environment > TOML file > compiled
//! default) and graceful handling of missing or partial config files.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests that
//! manipulate BASELINE_* variables are marked with #[serial] so they run
//! sequentially, not in parallel.

use baseline_common::config::ServiceConfig;
use serial_test::serial;
use std::env;
use std::io::Write;

const ENV_VARS: &[&str] = &[
    "BASELINE_BIND_HOST",
    "BASELINE_BIND_PORT",
    "BASELINE_API_BASE_URL",
    "BASELINE_REQUEST_TIMEOUT_SECS",
    "BASELINE_USER_AGENT",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
#[serial]
fn test_no_file_no_env_uses_defaults() {
    clear_env();

    // Missing file at the default location must not be an error
    let config = ServiceConfig::load(None).unwrap();
    assert_eq!(config.api_base_url, "https://api.webstatus.dev");
    assert_eq!(config.bind_port, 5870);
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    clear_env();

    let file = write_config(
        r#"
bind_port = 8080
api_base_url = "https://staging.webstatus.example"
"#,
    );

    let config = ServiceConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.bind_port, 8080);
    assert_eq!(config.api_base_url, "https://staging.webstatus.example");
    // Fields absent from the file keep their defaults
    assert_eq!(config.bind_host, "127.0.0.1");
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    env::set_var("BASELINE_BIND_PORT", "9999");
    env::set_var("BASELINE_API_BASE_URL", "http://127.0.0.1:4000");

    let file = write_config("bind_port = 8080\napi_base_url = \"https://from-file.example\"\n");
    let config = ServiceConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.bind_port, 9999);
    assert_eq!(config.api_base_url, "http://127.0.0.1:4000");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_ignored() {
    clear_env();
    env::set_var("BASELINE_BIND_PORT", "not-a-port");

    let config = ServiceConfig::load(None).unwrap();
    assert_eq!(config.bind_port, 5870);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_toml_is_config_error() {
    clear_env();

    let file = write_config("bind_port = \"definitely not a number");
    let result = ServiceConfig::load(Some(file.path()));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
#[serial]
fn test_missing_explicit_path_is_config_error() {
    clear_env();

    let result = ServiceConfig::load(Some(std::path::Path::new(
        "/nonexistent/baseline/config.toml",
    )));
    assert!(result.is_err());
}
