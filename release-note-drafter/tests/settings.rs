use std::path::PathBuf;
use std::time::Duration;

use release_note_drafter::{load_settings, ConfigError, ConfigOverrides, RunnerConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn load_settings_from_fixture() {
    let settings = load_settings(&fixture("release-notes.toml")).unwrap();

    assert_eq!(settings.user.as_deref(), Some("acme"));
    assert_eq!(settings.repo.as_deref(), Some("widgets"));
    assert_eq!(settings.from.as_deref(), Some("develop"));
    assert_eq!(settings.to.as_deref(), Some("main"));
    assert_eq!(settings.concurrency, Some(4));
    assert_eq!(settings.timeout_secs, Some(10));
}

#[test]
fn load_settings_rejects_invalid_fixture() {
    let result = load_settings(&fixture("invalid-settings.toml"));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn settings_fill_in_runner_config() {
    let settings = load_settings(&fixture("release-notes.toml")).unwrap();
    let overrides = ConfigOverrides {
        token: Some("ghp_test".to_string()),
        ..Default::default()
    };

    let config = RunnerConfig::resolve(overrides, settings).unwrap();

    assert_eq!(config.owner(), "acme");
    assert_eq!(config.repo(), "widgets");
    assert_eq!(config.from(), "develop");
    assert_eq!(config.to(), "main");
    assert_eq!(config.pool().concurrency(), 4);
    assert_eq!(config.pool().timeout(), Duration::from_secs(10));
}

#[test]
fn settings_never_supply_the_token() {
    let settings = load_settings(&fixture("release-notes.toml")).unwrap();

    let result = RunnerConfig::resolve(ConfigOverrides::default(), settings);

    assert!(matches!(
        result,
        Err(ConfigError::MissingValue { name: "token" })
    ));
}
