use glint_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_logger_installs_once() {
    let logger = Logger::builder("integration-console")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");
    assert!(!logger.has_file_output(), "console-only logger should not write files");

    let err = Logger::builder("integration-console-second")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
