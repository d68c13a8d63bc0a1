use async_trait::async_trait;

use super::errors::CarError;
use super::models::Car;
use super::models::CarId;
use super::models::CarRequest;

/// Port for car domain service operations.
#[async_trait]
pub trait CarServicePort: Send + Sync + 'static {
    /// Retrieve a car with full engine detail.
    ///
    /// # Errors
    /// * `NotFound` - Car does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_car_by_id(&self, id: CarId) -> Result<Car, CarError>;

    /// List cars of a brand.
    ///
    /// `include_engine` is a projection toggle: `true` joins full engine
    /// detail onto each car, `false` returns identity-only engines.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_cars_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, CarError>;

    /// Validate and persist a new car.
    ///
    /// # Errors
    /// * `Validation` - A field rule failed; nothing was persisted
    /// * `EngineNotFound` - The referenced engine is absent from the store
    /// * `DatabaseError` - Database operation failed
    async fn create_car(&self, request: &CarRequest) -> Result<Car, CarError>;

    /// Validate and persist changes to an existing car.
    ///
    /// # Errors
    /// * `Validation` - A field rule failed; nothing was persisted
    /// * `NotFound` - Car does not exist
    /// * `EngineNotFound` - The referenced engine is absent from the store
    /// * `DatabaseError` - Database operation failed
    async fn update_car(&self, id: CarId, request: &CarRequest) -> Result<Car, CarError>;

    /// Remove a car, returning its prior state.
    ///
    /// # Errors
    /// * `NotFound` - Car does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_car(&self, id: CarId) -> Result<Car, CarError>;
}

/// Repository port for car persistence operations.
///
/// Assigns identity and timestamps on create. Absent rows are reported as
/// `None`, never as an error; the service layer decides what absence means.
#[async_trait]
pub trait CarRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarError>;

    async fn find_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, CarError>;

    async fn create(&self, request: &CarRequest) -> Result<Car, CarError>;

    async fn update(&self, id: CarId, request: &CarRequest) -> Result<Option<Car>, CarError>;

    async fn delete(&self, id: CarId) -> Result<Option<Car>, CarError>;
}
