use mobifacil::config::{Config, ConfigError, ConfigStore, MIN_WIDE_BREAKPOINT};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.timing.login_delay(), Duration::from_millis(1200));
    assert_eq!(config.timing.recharge_delay(), Duration::from_millis(1500));
    assert_eq!(config.timing.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.layout.wide_breakpoint, 100);
    assert!(config.behavior.cancel_pending_on_leave);
    assert_eq!(config.log.level, "info");
    assert!(config.log.file.is_none());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("mobifacil/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[timing]
recharge_delay_ms = 300

[behavior]
cancel_pending_on_leave = false

[log]
level = "debug"
file = "/tmp/mobifacil.log"
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.timing.recharge_delay_ms, 300);
    assert_eq!(config.timing.login_delay_ms, 1200);
    assert!(!config.behavior.cancel_pending_on_leave);
    assert_eq!(config.layout.wide_breakpoint, 100);
    assert_eq!(config.log.level, "debug");
    assert_eq!(
        config.log.file.as_deref(),
        Some(std::path::Path::new("/tmp/mobifacil.log"))
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[timing\nlogin_delay_ms = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = write_config("[timing]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn narrow_breakpoint_is_rejected() {
    let mut config = Config::default();
    config.layout.wide_breakpoint = MIN_WIDE_BREAKPOINT - 1;
    assert!(config.validate().is_err());
    config.layout.wide_breakpoint = MIN_WIDE_BREAKPOINT;
    assert!(config.validate().is_ok());
}

#[test]
fn reload_picks_up_changes() {
    let (_dir, path) = write_config("[layout]\nwide_breakpoint = 120\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("load"), path.clone());
    assert_eq!(store.get().layout.wide_breakpoint, 120);

    std::fs::write(&path, "[layout]\nwide_breakpoint = 80\n").expect("rewrite");
    store.reload().expect("reload");
    assert_eq!(store.get().layout.wide_breakpoint, 80);
}
