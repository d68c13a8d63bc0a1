use thiserror::Error;

use super::models::EngineId;

/// Error type for EngineId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Field-level validation failures for an engine record.
///
/// Surfaced verbatim to the client; the first failing rule wins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineValidationError {
    #[error("displacement must be greater than zero")]
    NonPositiveDisplacement,

    #[error("noOfCylinders must be greater than zero")]
    NonPositiveCylinders,

    #[error("carRange must be greater than zero")]
    NonPositiveRange,
}

/// Top-level error type for all engine-related operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] EngineValidationError),

    #[error("Invalid engine ID: {0}")]
    InvalidEngineId(#[from] EngineIdError),

    #[error("Engine not found: {0}")]
    NotFound(EngineId),

    #[error("Engine {0} is still referenced by a car")]
    InUse(EngineId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
