//! Tests for error types

use actionsmith_core::Error;
use miette::Diagnostic;
use std::path::Path;

#[test]
fn test_configuration_error() {
    let error = Error::configuration("consistency check requires a target_file_name");
    assert_eq!(
        error.to_string(),
        "Configuration error: consistency check requires a target_file_name"
    );

    let error = Error::configuration(String::from("no git root"));
    assert_eq!(error.to_string(), "Configuration error: no git root");
}

#[test]
fn test_validation_error() {
    let error = Error::validation("workflow must have at least one trigger");
    assert_eq!(
        error.to_string(),
        "Validation failed: workflow must have at least one trigger"
    );
}

#[test]
fn test_serialization_error() {
    let error = Error::serialization("unexpected end of document");
    assert_eq!(
        error.to_string(),
        "Serialization failed: unexpected end of document"
    );
}

#[test]
fn test_io_error() {
    use std::io;

    let path = Path::new("/repo/.github/workflows/build.yml");
    let error = Error::io(path, io::Error::new(io::ErrorKind::NotFound, "file not found"));

    assert_eq!(
        error.to_string(),
        "I/O error at /repo/.github/workflows/build.yml: file not found"
    );
    match error {
        Error::Io { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_diagnostic_codes() {
    let cases = [
        (Error::configuration("x"), "actionsmith::configuration"),
        (Error::validation("x"), "actionsmith::validation"),
        (Error::serialization("x"), "actionsmith::serialization"),
        (
            Error::io(Path::new("x"), std::io::Error::other("x")),
            "actionsmith::io",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.code().map(|c| c.to_string()).as_deref(), Some(expected));
    }
}

#[test]
fn test_help_text() {
    assert!(Error::configuration("x").help().is_some());
    assert!(Error::validation("x").help().is_none());
}

#[test]
fn test_error_into_report() {
    let report = miette::Report::new(Error::validation("duplicate job id 'build'"));
    assert!(report.to_string().contains("duplicate job id"));
}
