//! Tests for the error module.

use crate::error::{
    config::ConfigError, dictionary::DictionaryError, report_error, set_error_reporter,
    ErrorContext, ErrorReporter, IpuError, TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = IpuError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = IpuError::Io(io_error);
    assert!(error.to_string().contains("file not found"));

    let error = IpuError::from(DictionaryError::NotFound(PathBuf::from("words.txt")));
    assert_eq!(
        error.to_string(),
        "Dictionary error: Dictionary file not found: words.txt"
    );

    let error = IpuError::from(ConfigError::ValidationError("bad".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));

    // The first reporter wins
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    report_error(ErrorContext::new(
        IpuError::Custom("test error".to_string()),
        "test_component",
    ));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(IpuError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
