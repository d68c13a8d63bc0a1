pub mod cars;
pub mod engines;
pub mod login;

// Re-export handlers for easy access
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
pub use cars::create_car;
pub use cars::delete_car;
pub use cars::get_car;
pub use cars::get_cars_by_brand;
pub use cars::update_car;
use chrono::DateTime;
use chrono::Utc;
pub use engines::create_engine;
pub use engines::delete_engine;
pub use engines::get_engine;
pub use engines::update_engine;
pub use login::login;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarRequest;
use crate::domain::car::models::EngineRef;
use crate::domain::engine::errors::EngineError;
use crate::domain::engine::models::Engine;
use crate::domain::engine::models::EngineId;
use crate::domain::engine::models::EngineRequest;

/// Standardized API success response
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    pub status: StatusCode,
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

/// Error responses produced by the handler layer.
///
/// Handlers own the error-kind to status-code mapping; domain errors convert
/// into this type and nothing below the handlers touches HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<CarError> for ApiError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::Validation(_) | CarError::InvalidCarId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CarError::NotFound(id) => ApiError::NotFound(format!("Car not found: {}", id)),
            CarError::EngineNotFound(id) => {
                ApiError::BadRequest(format!("Referenced engine does not exist: {}", id))
            }
            CarError::DatabaseError(msg) | CarError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(_) | EngineError::InvalidEngineId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            EngineError::NotFound(id) => ApiError::NotFound(format!("Engine not found: {}", id)),
            EngineError::InUse(id) => {
                ApiError::UnprocessableEntity(format!("Engine {} is still referenced by a car", id))
            }
            EngineError::DatabaseError(msg) | EngineError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

/// Full engine detail as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct EngineData {
    pub id: Uuid,
    pub displacement: i32,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i32,
    #[serde(rename = "carRange")]
    pub car_range: i32,
}

impl From<&Engine> for EngineData {
    fn from(engine: &Engine) -> Self {
        Self {
            id: engine.id.into_uuid(),
            displacement: engine.displacement,
            no_of_cylinders: engine.no_of_cylinders,
            car_range: engine.car_range,
        }
    }
}

/// Engine attachment on a car response.
///
/// Detail fields are omitted when the operation projected identity only.
#[derive(Debug, Clone, Serialize)]
pub struct CarEngineData {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displacement: Option<i32>,
    #[serde(rename = "noOfCylinders", skip_serializing_if = "Option::is_none")]
    pub no_of_cylinders: Option<i32>,
    #[serde(rename = "carRange", skip_serializing_if = "Option::is_none")]
    pub car_range: Option<i32>,
}

impl From<&EngineRef> for CarEngineData {
    fn from(engine: &EngineRef) -> Self {
        match engine {
            EngineRef::Id(id) => Self {
                id: id.into_uuid(),
                displacement: None,
                no_of_cylinders: None,
                car_range: None,
            },
            EngineRef::Full(engine) => Self {
                id: engine.id.into_uuid(),
                displacement: Some(engine.displacement),
                no_of_cylinders: Some(engine.no_of_cylinders),
                car_range: Some(engine.car_range),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CarData {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub engine: CarEngineData,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Car> for CarData {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.into_uuid(),
            name: car.name.clone(),
            year: car.year.clone(),
            brand: car.brand.clone(),
            fuel_type: car.fuel_type.as_str().to_string(),
            engine: (&car.engine).into(),
            price: car.price,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Request DTO for creating or updating a car.
///
/// Fields default when absent so the validators report the missing field,
/// instead of deserialization rejecting the body wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarRequestBody {
    pub name: String,
    pub year: String,
    pub brand: String,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub engine: CarEngineRequestBody,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarEngineRequestBody {
    pub id: Uuid,
    pub displacement: i32,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i32,
    #[serde(rename = "carRange")]
    pub car_range: i32,
}

impl From<CarRequestBody> for CarRequest {
    fn from(body: CarRequestBody) -> Self {
        Self {
            name: body.name,
            year: body.year,
            brand: body.brand,
            fuel_type: body.fuel_type,
            engine: Engine {
                id: EngineId(body.engine.id),
                displacement: body.engine.displacement,
                no_of_cylinders: body.engine.no_of_cylinders,
                car_range: body.engine.car_range,
            },
            price: body.price,
        }
    }
}

/// Request DTO for creating or updating an engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineRequestBody {
    pub displacement: i32,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i32,
    #[serde(rename = "carRange")]
    pub car_range: i32,
}

impl From<EngineRequestBody> for EngineRequest {
    fn from(body: EngineRequestBody) -> Self {
        Self {
            displacement: body.displacement,
            no_of_cylinders: body.no_of_cylinders,
            car_range: body.car_range,
        }
    }
}
