// tests/integration/config_test.rs

use super::fixtures::{LETTER_CONFIG, LETTER_REQUEST};
use super::test_helpers::init_tracing;
use handlerchain::config::Config;
use handlerchain::core::Request;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_end_to_end() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LETTER_CONFIG.as_bytes()).unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.request, LETTER_REQUEST);
    assert_eq!(config.handlers.len(), 5);

    let pipeline = config.build_pipeline().unwrap();
    let mut request = Request::new(config.request.clone());
    let report = pipeline.run(&mut request).unwrap();

    assert_eq!(request.as_str(), "fg");
    assert_eq!(report.changed_by().len(), 5);
}

#[test]
fn test_missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let path = path.to_str().unwrap();

    let err = Config::from_file(path).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to read config file"));
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn test_invalid_config_file_is_rejected_with_context() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[[handlers]]\nname = \"x\"\nkind = \"remove_chars\"\nchars = \"\"\n")
        .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let err = Config::from_file(&path).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("Invalid configuration"));
    assert!(message.contains("non-empty 'chars'"));
}
