pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::car::models::Car;
pub use domain::car::models::CarId;
pub use domain::car::models::FuelType;
pub use domain::car::service::CarService;
pub use domain::engine::models::Engine;
pub use domain::engine::models::EngineId;
pub use domain::engine::service::EngineService;
pub use inbound::http::metrics::HttpMetrics;
