use std::sync::Arc;

use async_trait::async_trait;

use super::errors::CarError;
use super::models::Car;
use super::models::CarId;
use super::models::CarRequest;
use super::ports::CarRepository;
use super::ports::CarServicePort;

/// Concrete implementation of CarServicePort.
///
/// Validates mutating requests before any persistence call, propagates
/// repository errors unchanged, and translates absent rows into `NotFound`.
/// Generic over repository for testability.
pub struct CarService<CR>
where
    CR: CarRepository,
{
    repository: Arc<CR>,
}

impl<CR> CarService<CR>
where
    CR: CarRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CarServicePort for CarService<CR>
where
    CR: CarRepository,
{
    async fn get_car_by_id(&self, id: CarId) -> Result<Car, CarError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CarError::NotFound(id))
    }

    async fn get_cars_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, CarError> {
        self.repository.find_by_brand(brand, include_engine).await
    }

    async fn create_car(&self, request: &CarRequest) -> Result<Car, CarError> {
        request.validate()?;

        self.repository.create(request).await
    }

    async fn update_car(&self, id: CarId, request: &CarRequest) -> Result<Car, CarError> {
        request.validate()?;

        self.repository
            .update(id, request)
            .await?
            .ok_or(CarError::NotFound(id))
    }

    async fn delete_car(&self, id: CarId) -> Result<Car, CarError> {
        self.repository
            .delete(id)
            .await?
            .ok_or(CarError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::car::errors::CarValidationError;
    use crate::domain::car::models::EngineRef;
    use crate::domain::car::models::FuelType;
    use crate::domain::engine::errors::EngineValidationError;
    use crate::domain::engine::models::Engine;
    use crate::domain::engine::models::EngineId;

    mock! {
        pub TestCarRepository {}

        #[async_trait]
        impl CarRepository for TestCarRepository {
            async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarError>;
            async fn find_by_brand(&self, brand: &str, include_engine: bool) -> Result<Vec<Car>, CarError>;
            async fn create(&self, request: &CarRequest) -> Result<Car, CarError>;
            async fn update(&self, id: CarId, request: &CarRequest) -> Result<Option<Car>, CarError>;
            async fn delete(&self, id: CarId) -> Result<Option<Car>, CarError>;
        }
    }

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

    fn car_from(request: &CarRequest) -> Car {
        Car {
            id: CarId::new(),
            name: request.name.clone(),
            year: request.year.clone(),
            brand: request.brand.clone(),
            fuel_type: request.fuel_type().expect("valid fuel type"),
            engine: EngineRef::Id(request.engine.id),
            price: request.price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_car_success() {
        let mut repository = MockTestCarRepository::new();

        repository
            .expect_create()
            .withf(|request| request.brand == "Tesla")
            .times(1)
            .returning(|request| Ok(car_from(request)));

        let service = CarService::new(Arc::new(repository));

        let car = service
            .create_car(&valid_request())
            .await
            .expect("create should succeed");
        assert_eq!(car.name, "Model X");
        assert_eq!(car.fuel_type, FuelType::Electric);
    }

    #[tokio::test]
    async fn test_create_car_non_positive_price_skips_persistence() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_create().times(0);

        let service = CarService::new(Arc::new(repository));

        let request = CarRequest {
            price: -500.0,
            ..valid_request()
        };
        let result = service.create_car(&request).await;

        assert!(matches!(
            result,
            Err(CarError::Validation(CarValidationError::NonPositivePrice))
        ));
    }

    #[tokio::test]
    async fn test_create_car_unknown_fuel_type_names_allowed_set() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_create().times(0);

        let service = CarService::new(Arc::new(repository));

        let request = CarRequest {
            fuel_type: "Coal".to_string(),
            ..valid_request()
        };
        let err = service.create_car(&request).await.expect_err("must fail");

        assert!(err.to_string().contains("Petrol, Diesel, Electric, Hybrid"));
    }

    #[tokio::test]
    async fn test_create_car_zero_cylinders_skips_persistence() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_create().times(0);

        let service = CarService::new(Arc::new(repository));

        let mut request = valid_request();
        request.engine.no_of_cylinders = 0;
        let result = service.create_car(&request).await;

        assert!(matches!(
            result,
            Err(CarError::Validation(CarValidationError::Engine(
                EngineValidationError::NonPositiveCylinders
            )))
        ));
    }

    #[tokio::test]
    async fn test_update_car_invalid_skips_persistence() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_update().times(0);

        let service = CarService::new(Arc::new(repository));

        let request = CarRequest {
            brand: String::new(),
            ..valid_request()
        };
        let result = service.update_car(CarId::new(), &request).await;

        assert!(matches!(
            result,
            Err(CarError::Validation(CarValidationError::MissingBrand))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_car_is_not_found() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_update().times(1).returning(|_, _| Ok(None));

        let service = CarService::new(Arc::new(repository));

        let result = service.update_car(CarId::new(), &valid_request()).await;
        assert!(matches!(result, Err(CarError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_car_by_id_not_found() {
        let mut repository = MockTestCarRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CarService::new(Arc::new(repository));

        let result = service.get_car_by_id(CarId::new()).await;
        assert!(matches!(result, Err(CarError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_cars_by_brand_passes_projection_flag() {
        let mut repository = MockTestCarRepository::new();

        repository
            .expect_find_by_brand()
            .withf(|brand, include_engine| brand == "Tesla" && *include_engine)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = CarService::new(Arc::new(repository));

        let cars = service
            .get_cars_by_brand("Tesla", true)
            .await
            .expect("filter should succeed");
        assert!(cars.is_empty());
    }

    #[tokio::test]
    async fn test_delete_car_returns_prior_state() {
        let mut repository = MockTestCarRepository::new();

        let request = valid_request();
        let stored = car_from(&request);
        let id = stored.id;
        let returned = stored.clone();

        repository
            .expect_delete()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = CarService::new(Arc::new(repository));

        let deleted = service.delete_car(id).await.expect("delete");
        assert_eq!(deleted, stored);
    }

    #[tokio::test]
    async fn test_delete_missing_car_is_not_found() {
        let mut repository = MockTestCarRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(None));

        let service = CarService::new(Arc::new(repository));

        let result = service.delete_car(CarId::new()).await;
        assert!(matches!(result, Err(CarError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_persistence_error_propagates_unchanged() {
        let mut repository = MockTestCarRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(CarError::DatabaseError("connection refused".to_string())));

        let service = CarService::new(Arc::new(repository));

        let result = service.create_car(&valid_request()).await;
        match result {
            Err(CarError::DatabaseError(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
