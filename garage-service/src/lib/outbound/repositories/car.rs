use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::car::errors::CarError;
use crate::domain::car::errors::CarValidationError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarRequest;
use crate::domain::car::models::EngineRef;
use crate::domain::car::models::FuelType;
use crate::domain::car::ports::CarRepository;
use crate::domain::engine::models::Engine;
use crate::domain::engine::models::EngineId;

/// Car persistence on Postgres.
///
/// Owns identity and timestamp assignment on create; lookups join the
/// engines table when full engine detail is requested.
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_fuel_type(value: &str) -> Result<FuelType, CarError> {
        FuelType::parse(value)
            .ok_or_else(|| CarError::DatabaseError(format!("Unexpected fuel type in row: {}", value)))
    }

    fn row_to_car(row: &PgRow, engine: EngineRef) -> Result<Car, CarError> {
        Ok(Car {
            id: CarId(row.get("id")),
            name: row.get("name"),
            year: row.get("year"),
            brand: row.get("brand"),
            fuel_type: Self::parse_fuel_type(&row.get::<String, _>("fuel_type"))?,
            engine,
            price: row.get("price"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn row_to_car_with_engine(row: &PgRow) -> Result<Car, CarError> {
        let engine = Engine {
            id: EngineId(row.get("engine_id")),
            displacement: row.get("displacement"),
            no_of_cylinders: row.get("no_of_cylinders"),
            car_range: row.get("car_range"),
        };
        Self::row_to_car(row, EngineRef::Full(engine))
    }

    fn row_to_car_with_engine_id(row: &PgRow) -> Result<Car, CarError> {
        Self::row_to_car(row, EngineRef::Id(EngineId(row.get("engine_id"))))
    }

    fn map_write_error(e: sqlx::Error, engine_id: EngineId) -> CarError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return CarError::EngineNotFound(engine_id);
            }
        }
        CarError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarError> {
        let row = sqlx::query(
            r#"
            SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price,
                   c.created_at, c.updated_at,
                   e.id AS engine_id, e.displacement, e.no_of_cylinders, e.car_range
            FROM cars c
            JOIN engines e ON e.id = c.engine_id
            WHERE c.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_car_with_engine(&r)?)),
            None => Ok(None),
        }
    }

    async fn find_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, CarError> {
        if include_engine {
            let rows = sqlx::query(
                r#"
                SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price,
                       c.created_at, c.updated_at,
                       e.id AS engine_id, e.displacement, e.no_of_cylinders, e.car_range
                FROM cars c
                JOIN engines e ON e.id = c.engine_id
                WHERE c.brand = $1
                ORDER BY c.created_at DESC
                "#,
            )
            .bind(brand)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CarError::DatabaseError(e.to_string()))?;

            rows.iter().map(Self::row_to_car_with_engine).collect()
        } else {
            let rows = sqlx::query(
                r#"
                SELECT id, name, year, brand, fuel_type, engine_id, price,
                       created_at, updated_at
                FROM cars
                WHERE brand = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(brand)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CarError::DatabaseError(e.to_string()))?;

            rows.iter().map(Self::row_to_car_with_engine_id).collect()
        }
    }

    async fn create(&self, request: &CarRequest) -> Result<Car, CarError> {
        let fuel_type = request
            .fuel_type()
            .ok_or(CarError::Validation(CarValidationError::UnknownFuelType))?;

        let id = CarId::new();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cars (id, name, year, brand, fuel_type, engine_id, price,
                              created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&request.name)
        .bind(&request.year)
        .bind(&request.brand)
        .bind(fuel_type.as_str())
        .bind(request.engine.id.as_uuid())
        .bind(request.price)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, request.engine.id))?;

        Ok(Car {
            id,
            name: request.name.clone(),
            year: request.year.clone(),
            brand: request.brand.clone(),
            fuel_type,
            engine: EngineRef::Id(request.engine.id),
            price: request.price,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: CarId, request: &CarRequest) -> Result<Option<Car>, CarError> {
        let fuel_type = request
            .fuel_type()
            .ok_or(CarError::Validation(CarValidationError::UnknownFuelType))?;

        let now = Utc::now();

        let row = sqlx::query(
            r#"
            UPDATE cars
            SET name = $2, year = $3, brand = $4, fuel_type = $5, engine_id = $6,
                price = $7, updated_at = $8
            WHERE id = $1
            RETURNING created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&request.name)
        .bind(&request.year)
        .bind(&request.brand)
        .bind(fuel_type.as_str())
        .bind(request.engine.id.as_uuid())
        .bind(request.price)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, request.engine.id))?;

        Ok(row.map(|r| Car {
            id,
            name: request.name.clone(),
            year: request.year.clone(),
            brand: request.brand.clone(),
            fuel_type,
            engine: EngineRef::Id(request.engine.id),
            price: request.price,
            created_at: r.get("created_at"),
            updated_at: now,
        }))
    }

    async fn delete(&self, id: CarId) -> Result<Option<Car>, CarError> {
        let row = sqlx::query(
            r#"
            DELETE FROM cars
            WHERE id = $1
            RETURNING id, name, year, brand, fuel_type, engine_id, price,
                      created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_car_with_engine_id(&r)?)),
            None => Ok(None),
        }
    }
}
