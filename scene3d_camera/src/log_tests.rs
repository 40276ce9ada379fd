//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global logger slot.
//!
//! The global logger is shared by every test in the binary: tests that swap it
//! are #[serial] and only look at entries carrying their own source string.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Logger that captures entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn entries_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

fn make_entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "test".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = make_entry(LogSeverity::Error, Some("camera.rs"), Some(42));

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.file, Some("camera.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry1 = make_entry(LogSeverity::Warn, Some("test.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both the plain and the file:line branch
        logger.log(&make_entry(severity, None, None));
        logger.log(&make_entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    log::log(LogSeverity::Info, "test::set_logger", "first".to_string());
    log::log(LogSeverity::Warn, "test::set_logger", "second".to_string());

    let captured = entries_from(&entries, "test::set_logger");
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "first");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert!(captured[1].file.is_none());

    log::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    log::log_detailed(LogSeverity::Error, "test::detailed", "boom".to_string(), "camera.rs", 99);

    let captured = entries_from(&entries, "test::detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("camera.rs"));
    assert_eq!(captured[0].line, Some(99));

    log::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_global_logger() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    crate::camera_trace!("test::macros", "trace {}", 1);
    crate::camera_debug!("test::macros", "debug {}", 2);
    crate::camera_info!("test::macros", "info {}", 3);
    crate::camera_warn!("test::macros", "warn {}", 4);
    crate::camera_error!("test::macros", "error {}", 5);

    let captured = entries_from(&entries, "test::macros");
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]
    );
    assert_eq!(captured[4].message, "error 5");
    assert!(captured[4].file.is_some());
    assert!(captured[4].line.is_some());

    log::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);
    log::reset_logger();

    log::log(LogSeverity::Info, "test::reset", "after reset".to_string());

    assert!(entries_from(&entries, "test::reset").is_empty());
}
