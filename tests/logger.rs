use datekit::config::LoggingConfig;
use datekit::logger;

#[test]
fn test_logging_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert_eq!(logger::init(&config).unwrap(), None);
}

#[test]
fn test_invalid_level_rejected_before_install() {
    let config = LoggingConfig {
        enabled: true,
        level: "loud".to_string(),
    };
    assert!(logger::init(&config).is_err());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("datekit/datekit.log"));
    }
}
