//! Error extension tests

use csf_domain::{Error, Result};
use csf_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_context_wraps_as_configuration() {
    let parse_error = "abc".parse::<i64>();

    let result: Result<i64> = parse_error.context("port must be numeric");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("port must be numeric"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_with_context_lazy() {
    let ok: std::result::Result<i64, io::Error> = Ok(7);

    let result = ok.with_context(|| -> String {
        unreachable!("context closure must not run on the success path")
    });

    assert_eq!(result.unwrap(), 7);
}

#[test]
fn test_with_context_message() {
    let io_error: std::result::Result<(), io::Error> =
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

    let result = io_error.with_context(|| format!("cannot open {}", "csf.toml"));

    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("cannot open csf.toml"));
            assert!(message.contains("denied"));
        }
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_source_chain_preserved() {
    let io_error = io::Error::other("disk on fire");

    let result: Result<()> = Err(io_error).io_context("flush failed");
    let err = result.unwrap_err();

    let source = std::error::Error::source(&err).expect("source should be preserved");
    assert!(source.to_string().contains("disk on fire"));
}
