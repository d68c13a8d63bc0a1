use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::car::models::CarId;
use crate::domain::car::models::CarRequest;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CarData;
use crate::inbound::http::handlers::CarRequestBody;
use crate::inbound::http::router::AppState;

pub async fn update_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    Json(body): Json<CarRequestBody>,
) -> Result<ApiSuccess<CarData>, ApiError> {
    let car_id = CarId::from_string(&car_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let request = CarRequest::from(body);

    state
        .car_service
        .update_car(car_id, &request)
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::OK, car.into()))
}
