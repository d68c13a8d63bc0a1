use std::fmt;

use chrono::DateTime;
use chrono::Datelike;
use chrono::Utc;
use uuid::Uuid;

use super::errors::CarIdError;
use super::errors::CarValidationError;
use crate::domain::engine::models;
use crate::domain::engine::models::Engine;
use crate::domain::engine::models::EngineId;

/// Car unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(pub Uuid);

impl CarId {
    /// Generate a new random car ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a car ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CarIdError> {
        Uuid::parse_str(s)
            .map(CarId)
            .map_err(|e| CarIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fuel type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    /// Parse from the wire representation; `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Petrol" => Some(FuelType::Petrol),
            "Diesel" => Some(FuelType::Diesel),
            "Electric" => Some(FuelType::Electric),
            "Hybrid" => Some(FuelType::Hybrid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine attachment on a car.
///
/// A car always carries its engine's identity; whether the full engine
/// record is joined in depends on the operation (the brand filter exposes
/// this as a projection toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineRef {
    Id(EngineId),
    Full(Engine),
}

impl EngineRef {
    pub fn id(&self) -> EngineId {
        match self {
            EngineRef::Id(id) => *id,
            EngineRef::Full(engine) => engine.id,
        }
    }
}

/// Car aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: CarId,
    pub name: String,
    /// Manufacture year, kept as the wire string and validated numerically
    pub year: String,
    pub brand: String,
    pub fuel_type: FuelType,
    pub engine: EngineRef,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create or update a car.
///
/// Carries the raw wire values; `validate` checks every domain rule before
/// the request is allowed near the persistence layer. The embedded engine is
/// checked structurally (non-nil identity, positive numerics) — existence in
/// the store is enforced by the schema, not by a lookup here.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRequest {
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine: Engine,
    pub price: f64,
}

impl CarRequest {
    /// Run every field rule in order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), CarValidationError> {
        validate_name(&self.name)?;
        validate_year(&self.year)?;
        validate_brand(&self.brand)?;
        validate_fuel_type(&self.fuel_type)?;
        validate_engine(&self.engine)?;
        validate_price(self.price)?;
        Ok(())
    }

    /// The validated fuel type.
    ///
    /// Only meaningful after `validate` has passed.
    pub fn fuel_type(&self) -> Option<FuelType> {
        FuelType::parse(&self.fuel_type)
    }
}

fn validate_name(name: &str) -> Result<(), CarValidationError> {
    if name.is_empty() {
        return Err(CarValidationError::MissingName);
    }
    Ok(())
}

fn validate_year(year: &str) -> Result<(), CarValidationError> {
    if year.is_empty() {
        return Err(CarValidationError::MissingYear);
    }
    let year: i32 = year
        .parse()
        .map_err(|_| CarValidationError::YearNotNumeric)?;

    let current_year = Utc::now().year();
    if !(1900..=current_year).contains(&year) {
        return Err(CarValidationError::YearOutOfRange { max: current_year });
    }
    Ok(())
}

fn validate_brand(brand: &str) -> Result<(), CarValidationError> {
    if brand.is_empty() {
        return Err(CarValidationError::MissingBrand);
    }
    Ok(())
}

fn validate_fuel_type(fuel_type: &str) -> Result<(), CarValidationError> {
    FuelType::parse(fuel_type)
        .map(|_| ())
        .ok_or(CarValidationError::UnknownFuelType)
}

fn validate_engine(engine: &Engine) -> Result<(), CarValidationError> {
    if engine.id.is_nil() {
        return Err(CarValidationError::MissingEngineId);
    }
    models::validate_displacement(engine.displacement)?;
    models::validate_no_of_cylinders(engine.no_of_cylinders)?;
    models::validate_car_range(engine.car_range)?;
    Ok(())
}

fn validate_price(price: f64) -> Result<(), CarValidationError> {
    if price <= 0.0 {
        return Err(CarValidationError::NonPositivePrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::errors::EngineValidationError;

    fn valid_request() -> CarRequest {
        CarRequest {
            name: "Model X".to_string(),
            year: "2021".to_string(),
            brand: "Tesla".to_string(),
            fuel_type: "Electric".to_string(),
            engine: Engine {
                id: EngineId::new(),
                displacement: 100,
                no_of_cylinders: 4,
                car_range: 300,
            },
            price: 50000.0,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let request = CarRequest {
            name: String::new(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(CarValidationError::MissingName));
    }

    #[test]
    fn test_empty_year_rejected() {
        let request = CarRequest {
            year: String::new(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(CarValidationError::MissingYear));
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        let request = CarRequest {
            year: "twenty-one".to_string(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(CarValidationError::YearNotNumeric));
    }

    #[test]
    fn test_year_bounds() {
        let current_year = Utc::now().year();

        let lower = CarRequest {
            year: "1900".to_string(),
            ..valid_request()
        };
        assert!(lower.validate().is_ok());

        let too_old = CarRequest {
            year: "1899".to_string(),
            ..valid_request()
        };
        assert_eq!(
            too_old.validate(),
            Err(CarValidationError::YearOutOfRange { max: current_year })
        );

        let future = CarRequest {
            year: (current_year + 1).to_string(),
            ..valid_request()
        };
        assert_eq!(
            future.validate(),
            Err(CarValidationError::YearOutOfRange { max: current_year })
        );
    }

    #[test]
    fn test_unknown_fuel_type_names_allowed_set() {
        let request = CarRequest {
            fuel_type: "Steam".to_string(),
            ..valid_request()
        };
        let err = request.validate().expect_err("must fail");
        assert_eq!(err, CarValidationError::UnknownFuelType);
        assert!(err.to_string().contains("Petrol, Diesel, Electric, Hybrid"));
    }

    #[test]
    fn test_nil_engine_id_rejected() {
        let mut request = valid_request();
        request.engine.id = EngineId::default();
        assert_eq!(request.validate(), Err(CarValidationError::MissingEngineId));
    }

    #[test]
    fn test_zero_cylinders_rejected() {
        let mut request = valid_request();
        request.engine.no_of_cylinders = 0;
        assert_eq!(
            request.validate(),
            Err(CarValidationError::Engine(
                EngineValidationError::NonPositiveCylinders
            ))
        );
    }

    #[test]
    fn test_zero_price_rejected() {
        let request = CarRequest {
            price: 0.0,
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(CarValidationError::NonPositivePrice)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Both name and price are invalid; the name rule runs first.
        let request = CarRequest {
            name: String::new(),
            price: -1.0,
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(CarValidationError::MissingName));
    }
}
