pub mod car;
pub mod engine;

pub use car::PostgresCarRepository;
pub use engine::PostgresEngineRepository;
