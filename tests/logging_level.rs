// tests/logging_level.rs

use clap::Parser;
use taskbot::cli::{CliArgs, LogLevel};
use taskbot::logging::resolve_level;
use tracing::Level;

#[test]
fn test_cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Debug), Some("error")), Level::DEBUG);
    assert_eq!(resolve_level(Some(LogLevel::Trace), None), Level::TRACE);
}

#[test]
fn test_env_value_is_used_without_flag() {
    assert_eq!(resolve_level(None, Some("info")), Level::INFO);
    assert_eq!(resolve_level(None, Some(" Warning ")), Level::WARN);
}

#[test]
fn test_default_is_warn() {
    assert_eq!(resolve_level(None, None), Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), Level::WARN);
}

#[test]
fn test_log_level_flag_parses_before_label() {
    let args =
        CliArgs::try_parse_from(["taskbot", "--log-level", "debug", "-s", "Job", "true"]).unwrap();

    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert_eq!(resolve_level(args.log_level, None), Level::DEBUG);
}
