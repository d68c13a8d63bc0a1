use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CarData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CarsByBrandQuery {
    brand: Option<String>,
    /// Projection toggle: "true" joins full engine detail onto each car
    engine: Option<String>,
}

pub async fn get_cars_by_brand(
    State(state): State<AppState>,
    Query(params): Query<CarsByBrandQuery>,
) -> Result<ApiSuccess<Vec<CarData>>, ApiError> {
    let brand = params.brand.unwrap_or_default();
    let include_engine = params.engine.as_deref() == Some("true");

    state
        .car_service
        .get_cars_by_brand(&brand, include_engine)
        .await
        .map_err(ApiError::from)
        .map(|cars| {
            let car_data: Vec<CarData> = cars.iter().map(|c| c.into()).collect();
            ApiSuccess::new(StatusCode::OK, car_data)
        })
}
