use thiserror::Error;

use super::models::CarId;
use crate::domain::engine::errors::EngineValidationError;
use crate::domain::engine::models::EngineId;

/// Error type for CarId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Field-level validation failures for a car request.
///
/// Surfaced verbatim to the client; the first failing rule wins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarValidationError {
    #[error("name is required")]
    MissingName,

    #[error("year is required")]
    MissingYear,

    #[error("year must be a valid number")]
    YearNotNumeric,

    #[error("year must be between 1900 and {max}")]
    YearOutOfRange { max: i32 },

    #[error("brand is required")]
    MissingBrand,

    #[error("fuelType must be one of Petrol, Diesel, Electric, Hybrid")]
    UnknownFuelType,

    #[error("engine id is required")]
    MissingEngineId,

    #[error(transparent)]
    Engine(#[from] EngineValidationError),

    #[error("price must be greater than zero")]
    NonPositivePrice,
}

/// Top-level error type for all car-related operations
#[derive(Debug, Error)]
pub enum CarError {
    #[error(transparent)]
    Validation(#[from] CarValidationError),

    #[error("Invalid car ID: {0}")]
    InvalidCarId(#[from] CarIdError),

    #[error("Car not found: {0}")]
    NotFound(CarId),

    #[error("Referenced engine does not exist: {0}")]
    EngineNotFound(EngineId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
