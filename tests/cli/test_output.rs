//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Relative time formatting (just now, minutes ago, hours ago, days ago)
//! - Line truncation on character boundaries
//! - Color helpers (respects NO_COLOR)
//! - Print helpers (print_success, print_warning, print_error)

use chrono::{Duration, Utc};
use docscope::cli::output::{
    colors, format_relative_time, print_error, print_header, print_json, print_numbered,
    print_success, print_warning, truncate_line,
};
use serial_test::serial;

// =============================================================================
// format_relative_time tests
// =============================================================================

/// Test relative time boundaries
#[test]
fn test_format_relative_time_boundaries() {
    let now = Utc::now();

    assert_eq!(format_relative_time(&(now - Duration::seconds(30))), "just now");
    assert_eq!(format_relative_time(&(now - Duration::seconds(61))), "1m ago");
    assert_eq!(format_relative_time(&(now - Duration::minutes(59))), "59m ago");
    assert_eq!(format_relative_time(&(now - Duration::minutes(61))), "1h ago");
    assert_eq!(format_relative_time(&(now - Duration::hours(25))), "1d ago");
    assert_eq!(format_relative_time(&(now - Duration::days(400))), "400d ago");
}

/// Test future timestamps
#[test]
fn test_format_relative_time_future() {
    let future = Utc::now() + Duration::days(1);
    assert_eq!(format_relative_time(&future), "in the future");
}

// =============================================================================
// truncate_line tests
// =============================================================================

/// Test truncation keeps short lines intact
#[test]
fn test_truncate_line_short() {
    assert_eq!(truncate_line("", 10), "");
    assert_eq!(truncate_line("exactly10!", 10), "exactly10!");
}

/// Test truncation of long lines
#[test]
fn test_truncate_line_long() {
    let line = "a".repeat(200);
    let truncated = truncate_line(&line, 80);

    assert_eq!(truncated.chars().count(), 80);
    assert!(truncated.ends_with("..."));
}

/// Test truncation never splits multi-byte characters
#[test]
fn test_truncate_line_multibyte() {
    let line = "🚀".repeat(20);
    let truncated = truncate_line(&line, 10);

    assert_eq!(truncated, format!("{}...", "🚀".repeat(7)));
}

// =============================================================================
// Color and print helpers
// =============================================================================

/// Test color helpers with colors disabled
#[test]
#[serial]
fn test_colors_plain_when_disabled() {
    colored::control::set_override(false);

    assert_eq!(colors::scope("unified").to_string(), "unified");
    assert_eq!(colors::file_path("a.md").to_string(), "a.md");
    assert_eq!(colors::number("3").to_string(), "3");

    colored::control::unset_override();
}

/// Test print helpers do not panic
#[test]
#[serial]
fn test_print_helpers() {
    print_success("done");
    print_warning("careful");
    print_error("failed");
    print_header("Title");
    print_numbered("first\nsecond", 9);
    print_numbered("", 1);
    assert!(print_json(&vec!["a", "b"]).is_ok());
}
