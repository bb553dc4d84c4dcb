//! Configuration loading integration tests

use aegis::config::{load_config, AnalyzerBackend, Environment, StorageTarget};
use secrecy::ExposeSecret;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_full_configuration() {
    let file = write_config(
        r#"
        environment = "staging"

        [application]
        log_level = "debug"

        [analysis]
        standards = ["GDPR", "HIPAA", "GENERAL"]
        backend = "local"

        [sanitization]

        [audit]
        enabled = false

        [storage]
        target = "jsonl"
        path = "./scratch"

        [logging]
        local_enabled = false
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.analysis.standards, vec!["GDPR", "HIPAA", "GENERAL"]);
    assert_eq!(config.analysis.backend, AnalyzerBackend::Local);
    assert!(!config.audit.enabled);
    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(config.storage.target, StorageTarget::Jsonl);
}

#[test]
fn remote_backend_round_trips_secret() {
    std::env::set_var("AEGIS_IT_REMOTE_KEY", "k-123456");
    let file = write_config(
        r#"
        [analysis]
        backend = "remote"

        [analysis.remote]
        endpoint = "https://models.example.com/v1/generate"
        api_key = "${AEGIS_IT_REMOTE_KEY}"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    let remote = config.analysis.remote.as_ref().unwrap();
    assert_eq!(remote.api_key.expose_secret().as_ref(), "k-123456");
    assert_eq!(remote.timeout_secs, 30);
    assert_eq!(remote.temperature, 0.1);
    std::env::remove_var("AEGIS_IT_REMOTE_KEY");
}

#[test]
fn remote_backend_without_section_fails_validation() {
    let file = write_config(
        r#"
        [analysis]
        backend = "remote"
        "#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("analysis.remote"));
}

#[test]
fn unset_substitution_variable_fails() {
    let file = write_config(
        r#"
        [application]
        log_level = "${AEGIS_IT_SURELY_UNSET}"
        "#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("AEGIS_IT_SURELY_UNSET"));
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = load_config("/tmp/does-not-exist/aegis.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn defaults_fill_missing_sections() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.analysis.standards, vec!["HIPAA", "GDPR"]);
    assert_eq!(config.storage.target, StorageTarget::Memory);
    assert!(config.audit.enabled);
}
