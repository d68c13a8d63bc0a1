use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::engine::models::EngineRequest;
use crate::domain::engine::ports::EngineServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EngineData;
use crate::inbound::http::handlers::EngineRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_engine(
    State(state): State<AppState>,
    Json(body): Json<EngineRequestBody>,
) -> Result<ApiSuccess<EngineData>, ApiError> {
    let request = EngineRequest::from(body);

    state
        .engine_service
        .create_engine(&request)
        .await
        .map_err(ApiError::from)
        .map(|ref engine| ApiSuccess::new(StatusCode::CREATED, engine.into()))
}
