use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use prometheus::Registry;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_car;
use super::handlers::create_engine;
use super::handlers::delete_car;
use super::handlers::delete_engine;
use super::handlers::get_car;
use super::handlers::get_cars_by_brand;
use super::handlers::get_engine;
use super::handlers::login;
use super::handlers::update_car;
use super::handlers::update_engine;
use super::metrics;
use super::metrics::HttpMetrics;
use super::middleware as auth_middleware;
use crate::domain::car::service::CarService;
use crate::domain::engine::service::EngineService;
use crate::outbound::repositories::car::PostgresCarRepository;
use crate::outbound::repositories::engine::PostgresEngineRepository;

/// Unified application state for all HTTP handlers.
///
/// Contains all service dependencies needed across the application.
#[derive(Clone)]
pub struct AppState {
    pub car_service: Arc<CarService<PostgresCarRepository>>,
    pub engine_service: Arc<EngineService<PostgresEngineRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub metrics: Arc<HttpMetrics>,
    pub registry: Registry,
}

pub fn create_router(
    car_service: Arc<CarService<PostgresCarRepository>>,
    engine_service: Arc<EngineService<PostgresEngineRepository>>,
    authenticator: Arc<Authenticator>,
    http_metrics: Arc<HttpMetrics>,
    registry: Registry,
) -> Router {
    let state = AppState {
        car_service,
        engine_service,
        authenticator,
        metrics: http_metrics,
        registry,
    };

    // Login and the scrape endpoint stay outside both middlewares.
    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/metrics", get(metrics::export));

    // Auth is the outermost layer: unauthorized requests are rejected before
    // the metrics recorder sees them.
    let protected_routes = Router::new()
        .route("/cars", get(get_cars_by_brand).post(create_car))
        .route(
            "/cars/:car_id",
            get(get_car).put(update_car).delete(delete_car),
        )
        .route("/engine", post(create_engine))
        .route(
            "/engine/:engine_id",
            get(get_engine).put(update_engine).delete(delete_engine),
        )
        .route_layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            metrics::track,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth_middleware::authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
