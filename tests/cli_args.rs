use clap::Parser;
use mobifacil::cli::Cli;
use mobifacil::config::Config;
use std::path::{Path, PathBuf};
use std::process::Command;

#[test]
fn help_lists_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_mobifacil"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--recharge-delay-ms"));
    assert!(stdout.contains("--keep-pending"));
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "mobifacil",
        "--login-delay-ms",
        "5",
        "--recharge-delay-ms",
        "7",
        "--log-file",
        "/tmp/m.log",
        "--keep-pending",
    ])
    .expect("parse");

    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.timing.login_delay_ms, 5);
    assert_eq!(config.timing.recharge_delay_ms, 7);
    assert_eq!(config.log.file.as_deref(), Some(Path::new("/tmp/m.log")));
    assert!(!config.behavior.cancel_pending_on_leave);
}

#[test]
fn no_flags_leave_config_alone() {
    let cli = Cli::try_parse_from(["mobifacil"]).expect("parse");
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
    assert_eq!(cli.config_path(), Config::config_path());
}

#[test]
fn explicit_config_path_wins() {
    let cli = Cli::try_parse_from(["mobifacil", "--config", "/etc/mf.toml"]).expect("parse");
    assert_eq!(cli.config_path(), PathBuf::from("/etc/mf.toml"));
}

#[test]
fn non_numeric_delay_is_rejected() {
    assert!(Cli::try_parse_from(["mobifacil", "--login-delay-ms", "soon"]).is_err());
}
