use std::sync::Arc;

use anyhow::Error;
use auth::Authenticator;
use auth::Credentials;
use garage_service::config::Config;
use garage_service::domain::car::service::CarService;
use garage_service::domain::engine::service::EngineService;
use garage_service::inbound::http::metrics::HttpMetrics;
use garage_service::inbound::http::router::create_router;
use garage_service::outbound::repositories::car::PostgresCarRepository;
use garage_service::outbound::repositories::engine::PostgresEngineRepository;
use prometheus::Registry;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garage_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "garage-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_validity_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    // Schema bootstrap is idempotent; a failure here is fatal to startup.
    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Credentials::new(&config.admin.username, &config.admin.password),
        config.jwt.expiration_hours,
    ));

    let registry = Registry::new();
    let http_metrics = Arc::new(HttpMetrics::new(&registry)?);

    let car_repository = Arc::new(PostgresCarRepository::new(pg_pool.clone()));
    let engine_repository = Arc::new(PostgresEngineRepository::new(pg_pool));

    let car_service = Arc::new(CarService::new(car_repository));
    let engine_service = Arc::new(EngineService::new(engine_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        "Server Listening"
    );

    let application = create_router(
        car_service,
        engine_service,
        authenticator,
        http_metrics,
        registry,
    );

    axum::serve(listener, application).await?;

    Ok(())
}
