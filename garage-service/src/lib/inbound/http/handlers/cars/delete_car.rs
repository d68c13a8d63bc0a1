use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::car::models::CarId;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CarData;
use crate::inbound::http::router::AppState;

/// Returns the deleted record's prior state so the caller can confirm
/// identity; an absent row is a 404, never a 500.
pub async fn delete_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<ApiSuccess<CarData>, ApiError> {
    let car_id = CarId::from_string(&car_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .car_service
        .delete_car(car_id)
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::OK, car.into()))
}
