//! Tests for loading settings from disk.

use std::io::Write;
use std::path::PathBuf;
use timetravel_tictactoe::{HighlightColor, Settings};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
moves_ascending = false
log_file = "game.log"
log_filter = "debug"
winning_highlight = "cyan"
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert!(!settings.moves_ascending());
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(*settings.winning_highlight(), HighlightColor::Cyan);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(*settings.moves_ascending());
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_unknown_highlight_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "winning_highlight = \"plaid\"").unwrap();
    assert!(Settings::from_file(file.path()).is_err());
}

#[test]
fn test_highlight_parses_from_string() {
    assert_eq!("magenta".parse::<HighlightColor>().unwrap(), HighlightColor::Magenta);
    assert_eq!(HighlightColor::Green.to_string(), "green");
}
