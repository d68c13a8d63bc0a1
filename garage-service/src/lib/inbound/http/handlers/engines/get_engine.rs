use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::engine::models::EngineId;
use crate::domain::engine::ports::EngineServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EngineData;
use crate::inbound::http::router::AppState;

pub async fn get_engine(
    State(state): State<AppState>,
    Path(engine_id): Path<String>,
) -> Result<ApiSuccess<EngineData>, ApiError> {
    let engine_id =
        EngineId::from_string(&engine_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .engine_service
        .get_engine_by_id(engine_id)
        .await
        .map_err(ApiError::from)
        .map(|ref engine| ApiSuccess::new(StatusCode::OK, engine.into()))
}
