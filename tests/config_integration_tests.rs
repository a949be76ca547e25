//! Integration tests for ConfigManager and settings file handling
//!
//! These tests verify:
//! - Settings loading and saving
//! - Default settings when no file exists
//! - Settings flowing into the run configuration

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use hhconvert::config::DEFAULT_SETTINGS_FILE;
use hhconvert::{ConfigManager, ConverterSettings, RunConfig};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let settings_path = config_path.join(DEFAULT_SETTINGS_FILE);
    let manager = ConfigManager::new(&settings_path);

    assert_eq!(manager.settings_path(), &settings_path);
}

#[test]
fn test_default_manager_uses_working_directory_file() {
    let manager = ConfigManager::default();
    assert_eq!(manager.settings_path().as_str(), "hhconvert.yaml");
}

#[test]
fn test_load_default_settings() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(config_path.join(DEFAULT_SETTINGS_FILE));

    // Settings file doesn't exist, should return defaults
    let settings = manager.load_settings().unwrap();

    assert_eq!(settings.preview_chars, 500);
    assert_eq!(settings.archive_extension, "zip");
    assert_eq!(settings.text_extension, "txt");
    assert!(!settings.debug_mode);
}

#[test]
fn test_save_creates_parent_directory() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let settings_path = config_path.join("nested").join("hhconvert.yaml");
    let manager = ConfigManager::new(&settings_path);

    manager.save_settings(&ConverterSettings::default()).unwrap();

    assert!(settings_path.exists());
}

#[test]
fn test_hand_written_yaml() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let settings_path = config_path.join(DEFAULT_SETTINGS_FILE);
    fs::write(
        &settings_path,
        "Preview Chars: 200\nDate Format: \"%Y-%m-%d\"\nLog Dir: logs\n",
    )
    .unwrap();

    let settings = ConfigManager::new(&settings_path).load_settings().unwrap();

    assert_eq!(settings.preview_chars, 200);
    assert_eq!(settings.date_format, "%Y-%m-%d");
    assert_eq!(settings.log_dir.as_deref(), Some("logs"));
    assert_eq!(settings.text_extension, "txt");
}

#[test]
fn test_date_format_setting_drives_output_folder() {
    let settings = ConverterSettings {
        date_format: "%Y-%m-%d".to_string(),
        ..ConverterSettings::default()
    };
    let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

    let config = RunConfig::resolve(Utf8Path::new("in"), None, false, false, settings, today).unwrap();

    assert_eq!(config.output_folder, Utf8PathBuf::from("in/2026-01-02"));
}
