use std::sync::Arc;

use async_trait::async_trait;

use super::errors::EngineError;
use super::models::Engine;
use super::models::EngineId;
use super::models::EngineRequest;
use super::ports::EngineRepository;
use super::ports::EngineServicePort;

/// Concrete implementation of EngineServicePort.
///
/// Validates mutating requests before any persistence call and translates
/// absent rows into `NotFound`. Generic over repository for testability.
pub struct EngineService<ER>
where
    ER: EngineRepository,
{
    repository: Arc<ER>,
}

impl<ER> EngineService<ER>
where
    ER: EngineRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EngineServicePort for EngineService<ER>
where
    ER: EngineRepository,
{
    async fn get_engine_by_id(&self, id: EngineId) -> Result<Engine, EngineError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EngineError::NotFound(id))
    }

    async fn create_engine(&self, request: &EngineRequest) -> Result<Engine, EngineError> {
        request.validate()?;

        self.repository.create(request).await
    }

    async fn update_engine(
        &self,
        id: EngineId,
        request: &EngineRequest,
    ) -> Result<Engine, EngineError> {
        request.validate()?;

        self.repository
            .update(id, request)
            .await?
            .ok_or(EngineError::NotFound(id))
    }

    async fn delete_engine(&self, id: EngineId) -> Result<Engine, EngineError> {
        self.repository
            .delete(id)
            .await?
            .ok_or(EngineError::NotFound(id))
    }
}
