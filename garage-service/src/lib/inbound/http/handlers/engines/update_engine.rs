use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::engine::models::EngineId;
use crate::domain::engine::models::EngineRequest;
use crate::domain::engine::ports::EngineServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EngineData;
use crate::inbound::http::handlers::EngineRequestBody;
use crate::inbound::http::router::AppState;

pub async fn update_engine(
    State(state): State<AppState>,
    Path(engine_id): Path<String>,
    Json(body): Json<EngineRequestBody>,
) -> Result<ApiSuccess<EngineData>, ApiError> {
    let engine_id =
        EngineId::from_string(&engine_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let request = EngineRequest::from(body);

    state
        .engine_service
        .update_engine(engine_id, &request)
        .await
        .map_err(ApiError::from)
        .map(|ref engine| ApiSuccess::new(StatusCode::OK, engine.into()))
}
