//! Tests for the scopes CLI command

use crate::cli::test_helpers::create_cli_test_services;
use docscope::cli::commands::scopes::{execute, ScopesArgs};
use docscope::cli::OutputFormat;

/// Test listing scope names in human format
#[test]
fn test_scopes_human() {
    let (services, _repo) = create_cli_test_services();

    let result = execute(ScopesArgs { paths: false }, &services, OutputFormat::Human);
    assert!(result.is_ok(), "Scopes should succeed: {:?}", result.err());
}

/// Test listing scopes with their roots in JSON format
#[test]
fn test_scopes_json_with_paths() {
    let (services, _repo) = create_cli_test_services();

    let result = execute(ScopesArgs { paths: true }, &services, OutputFormat::Json);
    assert!(result.is_ok(), "Scopes should succeed: {:?}", result.err());
}
