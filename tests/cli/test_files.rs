//! Tests for the files CLI command

use crate::cli::test_helpers::{create_cli_services_with, create_cli_test_services};
use docscope::cli::commands::files::{execute, FilesArgs};
use docscope::cli::OutputFormat;

fn args(scope: &str, absolute: bool) -> FilesArgs {
    FilesArgs {
        scope: scope.to_string(),
        absolute,
    }
}

/// Test listing files with relative paths
#[test]
fn test_files_human() {
    let (services, _repo) = create_cli_test_services();

    let result = execute(args("guides", false), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Files should succeed: {:?}", result.err());
}

/// Test listing absolute paths in JSON
#[test]
fn test_files_json_absolute() {
    let (services, _repo) = create_cli_test_services();

    let result = execute(args("api", true), &services, OutputFormat::Json);
    assert!(result.is_ok());
}

/// Test a scope whose root is missing
#[test]
fn test_files_empty_scope() {
    let (services, _repo) = create_cli_services_with(&[]);

    let result = execute(args("cookbook", false), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Empty scope is not an error");
}

/// Test an unknown scope
#[test]
fn test_files_unknown_scope() {
    let (services, _repo) = create_cli_test_services();

    let result = execute(args("nope", false), &services, OutputFormat::Json);
    assert!(result.is_err());
}
