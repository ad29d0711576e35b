//! Tracing subscriber setup shared by both binaries.
//!
//! Logs always go to stderr: stdout carries MCP frames or command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log format ("json" or anything else)
pub const LOG_FORMAT_ENV: &str = "DOCSCOPE_LOG_FORMAT";

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice
/// is harmless; the second call is ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .compact(),
            )
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
