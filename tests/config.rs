use datehash::config::Config;
use datehash::utils::datetime;
use datehash::WeekStart;
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("datehash-test-{}-{}", std::process::id(), name))
        .join("config.toml")
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.calendar.week_start, WeekStart::Sunday);
    assert_eq!(config.display.date_format, datetime::DEFAULT_DATE_FORMAT);
    assert_eq!(config.display.title_format, "yyyy.mm");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[calendar]
week_start = "monday"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.calendar.week_start, WeekStart::Monday);
    assert!(config.logging.enabled);

    assert_eq!(config.logging.level, "warn"); // default value
    assert_eq!(config.display.date_format, datetime::DEFAULT_DATE_FORMAT); // default value
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.calendar.week_start, default_config.calendar.week_start);
    assert_eq!(config.display.title_format, default_config.display.title_format);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_unknown_week_start_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[calendar]\nweek_start = \"wednesday\"\n");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_date_format() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_title_format() {
    let mut config = Config::default();
    config.display.title_format = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_generate_and_load_default_config() {
    let path = temp_config_path("generate");
    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# datehash Configuration File"));
    assert!(content.contains("week_start = \"sunday\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.calendar.week_start, WeekStart::Sunday);
    assert_eq!(loaded.display.title_format, "yyyy.mm");

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_load_from_file_reports_invalid_values() {
    let path = temp_config_path("invalid");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_load_from_missing_file() {
    let result = Config::load_from_file("/nonexistent/datehash/config.toml");
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read config file"));
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("datehash/config.toml"));
    }
}
