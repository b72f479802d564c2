use snipshare::config::LoggingConfig;
use snipshare::constants::MAX_LOG_ENTRIES;
use snipshare::logger::Logger;
use snipshare::storage::LocalStorage;
use snipshare::{ListSnippetsParams, NoopRevalidator, SnippetActions};
use sea_orm::ConnectionTrait;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.log_file().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_config_based_logging_enabled() {
    let path = std::env::temp_dir().join("snipshare_logger_test.log");
    let config = LoggingConfig {
        enabled: true,
        file: Some(path.clone()),
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.log_file(), Some(&path));
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_log_buffer_is_bounded() {
    let logger = Logger::with_capacity(5);
    for i in 0..12 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 5);
    assert!(logs[0].contains("entry 11"));
    assert!(logs[4].contains("entry 7"));
    assert!(logs.iter().all(|l| !l.contains("entry 6")));
}

#[test]
fn test_default_log_buffer_caps_at_max_entries() {
    let logger = Logger::new();
    assert_eq!(logger.capacity(), MAX_LOG_ENTRIES);

    for i in 0..MAX_LOG_ENTRIES + 25 {
        logger.log(format!("record {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert!(logs[0].contains(&format!("record {}", MAX_LOG_ENTRIES + 24)));

    let from_config = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert_eq!(from_config.capacity(), MAX_LOG_ENTRIES);
}

#[tokio::test]
async fn test_swallowed_read_failure_is_logged() {
    let logger = Logger::init(&LoggingConfig::default()).unwrap();
    assert!(Logger::global().is_some());

    let storage = LocalStorage::in_memory().await.unwrap();
    let actions = SnippetActions::new(storage.conn.clone(), NoopRevalidator);
    storage.conn.execute_unprepared("DROP TABLE snippets").await.unwrap();

    let result = actions.list_snippets(ListSnippetsParams::new(1, "")).await;
    assert!(result.data.is_empty());
    assert_eq!(result.total_pages, 0);

    assert!(actions.get_snippet_by_id("anything").await.is_none());

    let logs = logger.get_logs();
    assert!(logs
        .iter()
        .any(|l| l.contains("snipshare::read_failure") && l.contains("listSnippets failed")));
    assert!(logs
        .iter()
        .any(|l| l.contains("snipshare::read_failure") && l.contains("getSnippetById failed")));
}
