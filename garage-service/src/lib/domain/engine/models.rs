use std::fmt;

use uuid::Uuid;

use super::errors::EngineIdError;
use super::errors::EngineValidationError;

/// Engine unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(pub Uuid);

impl EngineId {
    /// Generate a new random engine ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an engine ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EngineIdError> {
        Uuid::parse_str(s)
            .map(EngineId)
            .map_err(|e| EngineIdError::InvalidFormat(e.to_string()))
    }

    /// Whether this is the nil UUID, i.e. no identity was supplied.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for EngineId {
    fn default() -> Self {
        Self(Uuid::nil())
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Engine entity.
///
/// Created independently of cars; a car references one by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub id: EngineId,
    /// Displacement in cc
    pub displacement: i32,
    pub no_of_cylinders: i32,
    /// Range on a full tank/charge
    pub car_range: i32,
}

/// Command to create or update an engine.
///
/// Identity is assigned by the persistence layer on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineRequest {
    pub displacement: i32,
    pub no_of_cylinders: i32,
    pub car_range: i32,
}

impl EngineRequest {
    /// Run every field rule, stopping at the first failure.
    pub fn validate(&self) -> Result<(), EngineValidationError> {
        validate_displacement(self.displacement)?;
        validate_no_of_cylinders(self.no_of_cylinders)?;
        validate_car_range(self.car_range)?;
        Ok(())
    }
}

pub(crate) fn validate_displacement(displacement: i32) -> Result<(), EngineValidationError> {
    if displacement <= 0 {
        return Err(EngineValidationError::NonPositiveDisplacement);
    }
    Ok(())
}

pub(crate) fn validate_no_of_cylinders(no_of_cylinders: i32) -> Result<(), EngineValidationError> {
    if no_of_cylinders <= 0 {
        return Err(EngineValidationError::NonPositiveCylinders);
    }
    Ok(())
}

pub(crate) fn validate_car_range(car_range: i32) -> Result<(), EngineValidationError> {
    if car_range <= 0 {
        return Err(EngineValidationError::NonPositiveRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> EngineRequest {
        EngineRequest {
            displacement: 1998,
            no_of_cylinders: 4,
            car_range: 700,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_displacement_rejected() {
        let request = EngineRequest {
            displacement: 0,
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(EngineValidationError::NonPositiveDisplacement)
        );
    }

    #[test]
    fn test_negative_cylinders_rejected() {
        let request = EngineRequest {
            no_of_cylinders: -2,
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(EngineValidationError::NonPositiveCylinders)
        );
    }

    #[test]
    fn test_zero_range_rejected() {
        let request = EngineRequest {
            car_range: 0,
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(EngineValidationError::NonPositiveRange)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let request = EngineRequest {
            displacement: 0,
            no_of_cylinders: 0,
            car_range: 0,
        };
        assert_eq!(
            request.validate(),
            Err(EngineValidationError::NonPositiveDisplacement)
        );
    }
}
