//! Error context extension tests

use sioc_domain::Error;
use sioc_infrastructure::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing_io().context("Loading beans").unwrap_err();
    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Loading beans: missing");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_context_keeps_original_source() {
    let err = failing_io().context("Loading beans").unwrap_err();
    let source = std::error::Error::source(&err).unwrap();
    let io = source.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_success_passes_through() {
    let ok: std::io::Result<u8> = Ok(1);
    assert_eq!(ok.config_context("Reading config").unwrap(), 1);
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("Writing config").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_config_context() {
    let err = failing_io().config_context("Reading config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Reading config"));
}
