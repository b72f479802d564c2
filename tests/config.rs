use snipshare::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.feed.page_size, 6);
    assert_eq!(config.database.url, "sqlite://snipshare.db?mode=rwc");
    assert_eq!(config.database.max_connections, 4);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Page size out of range should fail
    config.feed.page_size = 0;
    assert!(config.validate().is_err());
    config.feed.page_size = 101;
    assert!(config.validate().is_err());

    // Reset and test empty database url
    config.feed.page_size = 6;
    config.database.url = "  ".to_string();
    assert!(config.validate().is_err());

    // Reset and test unknown log level
    config.database.url = "sqlite::memory:".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("page_size = 6"));
    assert!(toml_str.contains("level = \"info\""));
    assert!(!toml_str.contains("file ="));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[feed]
page_size = 12

[logging]
enabled = true
file = "/tmp/snipshare-test.log"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.feed.page_size, 12);
    assert!(config.logging.enabled);
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/snipshare-test.log"))
    );

    // Check that unspecified values use defaults
    assert_eq!(config.database.url, "sqlite://snipshare.db?mode=rwc");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.feed.page_size, default_config.feed.page_size);
    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let path = std::env::temp_dir().join(format!("snipshare_invalid_{}.toml", std::process::id()));
    std::fs::write(&path, "[feed]\npage_size = 0\n").unwrap();

    let result = Config::load_from_file(&path);
    assert!(result.is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("snipshare_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# snipshare Configuration File"));
    assert!(content.contains("page_size = 6"));

    // The generated file loads back as the defaults
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.feed.page_size, 6);

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generated_message_is_plain_text() {
    assert!(snipshare::constants::CONFIG_GENERATED.is_ascii());
}
