use glint_logger::{FileOutput, LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("integration-file")
        .console(false)
        .level(LevelFilter::INFO)
        .file(FileOutput::new(&log_dir).rotation(Rotation::NEVER).json())
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(code = "DWARF", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.to_string_lossy().contains("integration-file"))
        .expect("log file should be created");

    let body = fs::read_to_string(&log_file)?;
    assert!(body.contains("hello from integration test"));
    assert!(body.contains("\"code\":\"DWARF\""), "json output expected: {body}");
    Ok(())
}
