use async_trait::async_trait;

use super::errors::EngineError;
use super::models::Engine;
use super::models::EngineId;
use super::models::EngineRequest;

/// Port for engine domain service operations.
#[async_trait]
pub trait EngineServicePort: Send + Sync + 'static {
    /// Retrieve engine by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Engine does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_engine_by_id(&self, id: EngineId) -> Result<Engine, EngineError>;

    /// Validate and persist a new engine.
    ///
    /// # Errors
    /// * `Validation` - A field rule failed; nothing was persisted
    /// * `DatabaseError` - Database operation failed
    async fn create_engine(&self, request: &EngineRequest) -> Result<Engine, EngineError>;

    /// Validate and persist changes to an existing engine.
    ///
    /// # Errors
    /// * `Validation` - A field rule failed; nothing was persisted
    /// * `NotFound` - Engine does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_engine(
        &self,
        id: EngineId,
        request: &EngineRequest,
    ) -> Result<Engine, EngineError>;

    /// Remove an engine, returning its prior state.
    ///
    /// # Errors
    /// * `NotFound` - Engine does not exist
    /// * `InUse` - A car still references the engine
    /// * `DatabaseError` - Database operation failed
    async fn delete_engine(&self, id: EngineId) -> Result<Engine, EngineError>;
}

/// Repository port for engine persistence operations.
///
/// Assigns identity on create. Absent rows are reported as `None`, never as
/// an error; the service layer decides what absence means.
#[async_trait]
pub trait EngineRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: EngineId) -> Result<Option<Engine>, EngineError>;

    async fn create(&self, request: &EngineRequest) -> Result<Engine, EngineError>;

    async fn update(
        &self,
        id: EngineId,
        request: &EngineRequest,
    ) -> Result<Option<Engine>, EngineError>;

    async fn delete(&self, id: EngineId) -> Result<Option<Engine>, EngineError>;
}
