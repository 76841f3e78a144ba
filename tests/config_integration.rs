//! Configuration layering: defaults, file, environment, CLI.

use std::env;
use std::fs;

use serial_test::serial;

use frontdesk::config::AppConfig;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("FRONTDESK_SERVER__PORT");
        env::remove_var("FRONTDESK_UPSTREAM__CHAT_BASE_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn defaults_without_any_source() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["frontdesk"]).expect("load defaults");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.upstream.chat_base_url, "http://127.0.0.1:8001");
    assert_eq!(config.upstream.vehicle_base_url, "http://127.0.0.1:8002");
    assert_eq!(config.chat.reply_delay_ms, 500);
}

#[test]
#[serial]
fn env_overrides_defaults() {
    clear_env_vars();
    unsafe {
        env::set_var("FRONTDESK_SERVER__PORT", "9090");
        env::set_var(
            "FRONTDESK_UPSTREAM__CHAT_BASE_URL",
            "http://chat.internal:9000",
        );
    }

    let config = AppConfig::load_from_args(["frontdesk"]).expect("load with env");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.upstream.chat_base_url, "http://chat.internal:9000");

    clear_env_vars();
}

#[test]
#[serial]
fn cli_flag_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("FRONTDESK_SERVER__PORT", "9090");
    }

    let config =
        AppConfig::load_from_args(["frontdesk", "--port", "7171"]).expect("load with cli");
    assert_eq!(config.server.port, 7171);

    clear_env_vars();
}

#[test]
#[serial]
fn file_load_via_config_file_env() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 7070
chat:
  reply_delay_ms: 0
    "#;

    let file_path = "test_config.yaml";
    fs::write(file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", file_path);
    }

    let config = AppConfig::load_from_args(["frontdesk"]).expect("load from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.chat.reply_delay_ms, 0);
    // Untouched keys keep their defaults.
    assert_eq!(config.upstream.chat_base_url, "http://127.0.0.1:8001");

    fs::remove_file(file_path).unwrap();
    clear_env_vars();
}

#[test]
#[serial]
fn invalid_base_url_fails_validation() {
    clear_env_vars();
    unsafe {
        env::set_var("FRONTDESK_UPSTREAM__CHAT_BASE_URL", "not a url");
    }

    let result = AppConfig::load_from_args(["frontdesk"]);
    assert!(result.is_err());

    clear_env_vars();
}
