//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for scope names
    pub fn scope(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for line numbers in hits and gutters
    pub fn line_number(s: &str) -> ColoredString {
        s.green()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let mins = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Shorten a line for terminal display, on a character boundary
pub fn truncate_line(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let kept: String = line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print content with a right-aligned line-number gutter
pub fn print_numbered(content: &str, first_line: usize) {
    let last = first_line + content.lines().count().saturating_sub(1);
    let width = last.to_string().len();
    for (offset, line) in content.lines().enumerate() {
        let number = format!("{:>width$}", first_line + offset);
        println!("{} {} {}", colors::line_number(&number), colors::dim("|"), line);
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
