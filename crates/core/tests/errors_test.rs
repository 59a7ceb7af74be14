use std::error::Error;

use fixmatch_core::errors::{EngineError, EngineResult};

#[test]
fn test_engine_error_display() {
    let invalid_slot = EngineError::InvalidSlot("start 18:00:00 is after end 09:00:00".to_string());
    let not_found = EngineError::NotFound("Master with id 9 not found".to_string());
    let validation = EngineError::Validation("Invalid input".to_string());
    let storage = EngineError::Storage(eyre::eyre!("connection refused"));
    let internal = EngineError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        invalid_slot.to_string(),
        "Invalid time slot: start 18:00:00 is after end 09:00:00"
    );
    assert_eq!(
        not_found.to_string(),
        "Resource not found: Master with id 9 not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(storage.to_string().contains("Storage error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_engine_result() {
    let result: EngineResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: EngineResult<i32> = Err(EngineError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_storage_error_from_eyre() {
    let report = eyre::eyre!("query failed");
    let error: EngineError = report.into();

    assert!(matches!(error, EngineError::Storage(_)));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let error = EngineError::Internal(boxed);

    assert!(error.to_string().contains("IO error"));
    assert!(error.source().is_some());
}
