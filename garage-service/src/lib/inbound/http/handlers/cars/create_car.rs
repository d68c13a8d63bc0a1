use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::car::models::CarRequest;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CarData;
use crate::inbound::http::handlers::CarRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_car(
    State(state): State<AppState>,
    Json(body): Json<CarRequestBody>,
) -> Result<ApiSuccess<CarData>, ApiError> {
    let request = CarRequest::from(body);

    state
        .car_service
        .create_car(&request)
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::CREATED, car.into()))
}
