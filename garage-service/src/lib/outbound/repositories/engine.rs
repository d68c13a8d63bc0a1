use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::engine::errors::EngineError;
use crate::domain::engine::models::Engine;
use crate::domain::engine::models::EngineId;
use crate::domain::engine::models::EngineRequest;
use crate::domain::engine::ports::EngineRepository;

pub struct PostgresEngineRepository {
    pool: PgPool,
}

impl PostgresEngineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_engine(row: &PgRow) -> Engine {
        Engine {
            id: EngineId(row.get("id")),
            displacement: row.get("displacement"),
            no_of_cylinders: row.get("no_of_cylinders"),
            car_range: row.get("car_range"),
        }
    }
}

#[async_trait]
impl EngineRepository for PostgresEngineRepository {
    async fn find_by_id(&self, id: EngineId) -> Result<Option<Engine>, EngineError> {
        let row = sqlx::query(
            r#"
            SELECT id, displacement, no_of_cylinders, car_range
            FROM engines
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EngineError::DatabaseError(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_engine))
    }

    async fn create(&self, request: &EngineRequest) -> Result<Engine, EngineError> {
        let engine = Engine {
            id: EngineId::new(),
            displacement: request.displacement,
            no_of_cylinders: request.no_of_cylinders,
            car_range: request.car_range,
        };

        sqlx::query(
            r#"
            INSERT INTO engines (id, displacement, no_of_cylinders, car_range)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(engine.id.as_uuid())
        .bind(engine.displacement)
        .bind(engine.no_of_cylinders)
        .bind(engine.car_range)
        .execute(&self.pool)
        .await
        .map_err(|e| EngineError::DatabaseError(e.to_string()))?;

        Ok(engine)
    }

    async fn update(
        &self,
        id: EngineId,
        request: &EngineRequest,
    ) -> Result<Option<Engine>, EngineError> {
        let row = sqlx::query(
            r#"
            UPDATE engines
            SET displacement = $2, no_of_cylinders = $3, car_range = $4
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id.as_uuid())
        .bind(request.displacement)
        .bind(request.no_of_cylinders)
        .bind(request.car_range)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EngineError::DatabaseError(e.to_string()))?;

        Ok(row.map(|_| Engine {
            id,
            displacement: request.displacement,
            no_of_cylinders: request.no_of_cylinders,
            car_range: request.car_range,
        }))
    }

    async fn delete(&self, id: EngineId) -> Result<Option<Engine>, EngineError> {
        let row = sqlx::query(
            r#"
            DELETE FROM engines
            WHERE id = $1
            RETURNING id, displacement, no_of_cylinders, car_range
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return EngineError::InUse(id);
                }
            }
            EngineError::DatabaseError(e.to_string())
        })?;

        Ok(row.as_ref().map(Self::row_to_engine))
    }
}
